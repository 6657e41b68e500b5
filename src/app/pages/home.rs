//! Home page: hero, search and the list of live events.

use dioxus::prelude::*;
use pixflow_types::{AdPlacement, Event};

use crate::app::api::use_api;
use crate::app::catalog::filter_events;
use crate::app::components::{AdBanner, ClockIcon, Layout, SearchIcon};
use crate::app::settings::use_settings;
use crate::app::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let site = use_settings();
    let mut query = use_signal(String::new);

    let events = use_resource(move || {
        let api = api.clone();
        async move { api.events().await.ok() }
    });

    let is_loading = events.read().is_none();
    let events_list = events.read().clone().flatten().unwrap_or_default();
    let q = query();
    let visible: Vec<Event> = filter_events(&events_list, &q)
        .into_iter()
        .cloned()
        .collect();

    let content = if is_loading {
        rsx! {
            div { class: "text-white/70", aria_busy: "true", "Loading..." }
        }
    } else if events_list.is_empty() {
        rsx! {
            div { class: "glass p-6 text-white/80", "No active events yet." }
        }
    } else if visible.is_empty() {
        rsx! {
            div { class: "glass p-6 text-white/80", "No events match your search." }
        }
    } else {
        rsx! {
            div { class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for event in visible {
                    EventCard { key: "{event.id}-{event.slug}", event }
                }
            }
        }
    };

    rsx! {
        Layout { title: "Live Events".to_string(),
            section { class: "max-w-7xl mx-auto px-4",
                div { class: "relative grid lg:grid-cols-2 gap-8 items-center",
                    div { class: "glass p-6 md:p-10",
                        h1 { class: "text-4xl md:text-5xl font-bold",
                            "Capture the moment. It fades in 15 days."
                        }
                        p { class: "mt-4 text-white/80",
                            "Browse events without logging in. Download watermarked photos or buy originals when enabled."
                        }
                        div { class: "mt-6 flex items-center gap-3",
                            div { class: "flex-1 glass flex items-center gap-2 px-3 py-2",
                                SearchIcon {}
                                input {
                                    class: "bg-transparent outline-none w-full placeholder-white/60",
                                    placeholder: "Search events",
                                    value: "{query}",
                                    oninput: move |e| query.set(e.value()),
                                }
                            }
                            a { class: "neon-btn px-4 py-2", href: "#events", "Explore" }
                        }
                    }
                }

                AdBanner {
                    monetization: site.monetization.clone(),
                    placement: AdPlacement::Homepage,
                    margin: "mt-8".to_string(),
                }

                div { id: "events", class: "mt-10",
                    h2 { class: "text-2xl font-semibold mb-4", "Live Events" }
                    {content}
                }
            }
        }
    }
}

/// One event in the home grid
#[component]
fn EventCard(event: Event) -> Element {
    let days_left = event
        .days_left
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    let date = event.date_or("Date TBA").to_string();

    rsx! {
        Link {
            to: Route::EventPage { slug: event.slug.clone() },
            class: "group glass overflow-hidden",
            div { class: "h-44 bg-white/5",
                if let Some(cover) = event.cover() {
                    img { src: "{cover}", class: "w-full h-full object-cover" }
                } else {
                    div { class: "w-full h-full grid place-items-center text-white/40", "No Cover" }
                }
            }
            div { class: "p-4",
                div { class: "font-semibold", "{event.title}" }
                div { class: "text-sm text-white/70", "{date}" }
                div { class: "mt-2 inline-flex items-center gap-2 text-xs bg-white/10 rounded-full px-3 py-1",
                    ClockIcon { size: 14 }
                    " {days_left} days left"
                }
            }
        }
    }
}

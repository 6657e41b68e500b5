//! Public event page: header with countdown, photo grid and contact box.

use dioxus::prelude::*;
use pixflow_types::{AdPlacement, EventDetail, Monetization, Photo};

use crate::app::api::use_api;
use crate::app::components::{AdBanner, ContactBox, Countdown, Layout};
use crate::app::settings::use_settings;

/// Event page component. `slug` is the last segment of `/event/:slug`.
#[component]
pub fn EventPage(slug: String) -> Element {
    let api = use_api();
    let site = use_settings();

    let detail = use_resource(use_reactive!(|(slug,)| {
        let api = api.clone();
        async move {
            match api.event_detail(&slug).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    tracing::debug!("Event {} unavailable: {}", slug, e);
                    None
                }
            }
        }
    }));

    let content = match detail.read().as_ref() {
        None => rsx! {
            div { class: "max-w-7xl mx-auto px-4 py-20 text-white/70", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "max-w-7xl mx-auto px-4 py-20",
                div { class: "glass p-6", "Event not found or expired." }
            }
        },
        Some(Some(detail)) => rsx! {
            EventBody { detail: detail.clone(), monetization: site.monetization.clone() }
        },
    };

    rsx! {
        Layout { title: "Event".to_string(), {content} }
    }
}

#[component]
fn EventBody(detail: EventDetail, monetization: Option<Monetization>) -> Element {
    let event = &detail.event;
    let location = event
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(|l| format!("• {}", l))
        .unwrap_or_default();
    let date = event.date.clone().unwrap_or_default();
    let photos: Vec<(String, Photo)> = detail
        .photos
        .iter()
        .enumerate()
        .map(|(idx, photo)| {
            let key = photo.id.clone().unwrap_or_else(|| idx.to_string());
            (key, photo.clone())
        })
        .collect();

    rsx! {
        document::Title { "{event.title} - PixFlow" }

        section { class: "max-w-7xl mx-auto px-4",
            div { class: "glass p-5 md:p-8",
                div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-3",
                    div {
                        h1 { class: "text-3xl font-bold", "{event.title}" }
                        div { class: "text-white/70", "{date} {location}" }
                    }
                    Countdown { key: "{event.id}", seconds: event.seconds_left }
                }
            }

            AdBanner { monetization: monetization.clone(), placement: AdPlacement::Event }

            div { class: "mt-6 columns-2 md:columns-3 lg:columns-4 gap-4 masonry",
                for (key, photo) in photos {
                    PhotoCard {
                        key: "{key}",
                        photo,
                        monetization: monetization.clone(),
                    }
                }
            }

            AdBanner { monetization: monetization.clone(), placement: AdPlacement::Sidebar }

            ContactBox {}
        }
    }
}

/// Photo with a free download link, or a buy button when payments are on.
#[component]
fn PhotoCard(photo: Photo, monetization: Option<Monetization>) -> Element {
    let api = use_api();
    let price = monetization
        .as_ref()
        .filter(|m| m.payments_enabled)
        .map(Monetization::price);
    let download = photo.id.as_deref().map(|id| api.download_url(id));

    rsx! {
        div { class: "photo-card glass overflow-hidden",
            img { src: "{photo.public_url}", class: "w-full h-auto", loading: "lazy" }
            div { class: "p-3 flex items-center justify-between text-sm",
                if let Some(price) = price {
                    button { class: "neon-btn px-3 py-1 text-sm", "Buy & Download — ${price}" }
                } else if let Some(href) = download {
                    a {
                        class: "neon-btn px-3 py-1 text-sm",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener",
                        "Download"
                    }
                }
            }
        }
    }
}

//! Admin dashboard: summary counters and the event table.

use dioxus::prelude::*;
use pixflow_types::Event;

use crate::app::api::use_api;
use crate::app::catalog::DashboardStats;
use crate::app::components::Layout;
use crate::app::session::{use_session, AdminGuard};
use crate::app::Route;

/// Dashboard page component.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        AdminGuard {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let api = use_api();
    let mut session = use_session();

    let events = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.admin_events().await;
            session.observe(&result);
            result.unwrap_or_else(|e| {
                tracing::debug!("Admin events unavailable: {}", e);
                Vec::new()
            })
        }
    });

    let events_list = events.read().clone().unwrap_or_default();
    let stats = DashboardStats::from_events(&events_list);
    let greeting = session
        .profile()
        .and_then(|p| p.full_name.or(p.username))
        .map(|name| format!("Welcome back, {}", name));

    rsx! {
        Layout { title: "Dashboard".to_string(),
            section { class: "max-w-7xl mx-auto px-4",
                if let Some(greeting) = greeting {
                    p { class: "mb-4 text-white/70", "{greeting}" }
                }

                div { class: "grid md:grid-cols-4 gap-4",
                    for (label, value) in stats.cards() {
                        div { key: "{label}", class: "glass p-5",
                            div { class: "text-sm text-white/70", "{label}" }
                            div { class: "text-2xl font-bold mt-1", "{value}" }
                        }
                    }
                }

                div { class: "mt-8 glass p-5",
                    div { class: "flex items-center justify-between mb-4",
                        h3 { class: "text-xl font-semibold", "Events" }
                        Link { class: "neon-btn px-3 py-2", to: Route::CreateEvent {}, "Create Event" }
                    }
                    div { class: "overflow-x-auto",
                        table { class: "w-full text-sm",
                            thead { class: "text-left text-white/70",
                                tr {
                                    th { class: "p-2", "Name" }
                                    th { "Date" }
                                    th { "Status" }
                                    th { "Days Left" }
                                    th { "Downloads" }
                                    th {}
                                }
                            }
                            tbody {
                                for event in events_list {
                                    EventRow { key: "{event.id}", event }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventRow(event: Event) -> Element {
    let date = event.date_or("—").to_string();
    let days_left = event
        .days_left
        .map(|d| d.to_string())
        .unwrap_or_default();

    rsx! {
        tr { class: "border-t border-white/10",
            td { class: "p-2", "{event.title}" }
            td { "{date}" }
            td { "{event.status}" }
            td { "{days_left}" }
            td { "{event.downloads}" }
            td { class: "text-right",
                Link {
                    class: "neon-btn px-3 py-1",
                    to: Route::ManageEvent { id: event.id.clone() },
                    "Manage"
                }
            }
        }
    }
}

//! New event form.

use dioxus::prelude::*;
use pixflow_types::NewEvent;
use tracing::{debug, info};

use crate::app::api::use_api;
use crate::app::components::Layout;
use crate::app::session::AdminGuard;
use crate::app::Route;

/// Bounds offered by the expiry inputs
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 90;

/// Parse a day count typed into a number input, keeping it in range.
pub fn parse_days(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .map(|days| days.clamp(MIN_DAYS, MAX_DAYS))
}

/// Create event page component.
#[component]
pub fn CreateEvent() -> Element {
    rsx! {
        AdminGuard {
            CreateEventForm {}
        }
    }
}

#[component]
fn CreateEventForm() -> Element {
    let api = use_api();
    let navigator = use_navigator();
    let mut form = use_signal(NewEvent::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let request = form();
        spawn(async move {
            match api.create_event(&request).await {
                Ok(created) => {
                    info!("Created event {}", created.id);
                    navigator.push(Route::ManageEvent { id: created.id });
                }
                Err(e) => debug!("Event not created: {}", e),
            }
        });
    };

    let current = form();

    rsx! {
        Layout { title: "Create Event".to_string(),
            section { class: "max-w-3xl mx-auto px-4",
                div { class: "glass p-6",
                    h1 { class: "text-2xl font-semibold mb-4", "Create Event" }
                    form { class: "grid gap-3", onsubmit: submit,
                        input {
                            class: "bg-white/10 rounded-xl px-4 py-3",
                            placeholder: "Title",
                            required: true,
                            value: "{current.title}",
                            oninput: move |e| form.write().title = e.value(),
                        }
                        input {
                            class: "bg-white/10 rounded-xl px-4 py-3",
                            placeholder: "Description",
                            value: "{current.description}",
                            oninput: move |e| form.write().description = e.value(),
                        }
                        input {
                            class: "bg-white/10 rounded-xl px-4 py-3",
                            placeholder: "Date",
                            value: "{current.date}",
                            oninput: move |e| form.write().date = e.value(),
                        }
                        input {
                            class: "bg-white/10 rounded-xl px-4 py-3",
                            placeholder: "Location",
                            value: "{current.location}",
                            oninput: move |e| form.write().location = e.value(),
                        }
                        label { class: "text-white/80",
                            "Expiry days"
                            input {
                                class: "bg-white/10 rounded-xl px-4 py-3 w-full",
                                r#type: "number",
                                min: "{MIN_DAYS}",
                                max: "{MAX_DAYS}",
                                value: "{current.expiry_days}",
                                oninput: move |e| {
                                    if let Some(days) = parse_days(&e.value()) {
                                        form.write().expiry_days = days;
                                    }
                                },
                            }
                        }
                        button { class: "neon-btn px-4 py-2", r#type: "submit", "Create" }
                    }
                }
            }
        }
    }
}

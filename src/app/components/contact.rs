//! "Didn't find your photo?" contact box.

use dioxus::prelude::*;
use pixflow_types::ContactRequest;
use tracing::debug;

use crate::app::api::use_api;

/// Contact form posting to `/public/contact`.
///
/// Switches to a thank-you note on success. Failures leave the form as is.
#[component]
pub fn ContactBox() -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let request = ContactRequest {
            name: name(),
            email: email(),
            message: message(),
        };
        spawn(async move {
            match api.contact(&request).await {
                Ok(()) => sent.set(true),
                Err(e) => debug!("Contact request not accepted: {}", e),
            }
        });
    };

    rsx! {
        div { class: "mt-10 glass p-6",
            h3 { class: "text-xl font-semibold mb-2", "Didn’t find your photo?" }
            if sent() {
                div { class: "text-green-300", "Thanks! We'll get back to you." }
            } else {
                form { class: "grid md:grid-cols-3 gap-3", onsubmit: submit,
                    input {
                        class: "bg-white/10 rounded-xl px-3 py-2 outline-none",
                        placeholder: "Name",
                        required: true,
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "bg-white/10 rounded-xl px-3 py-2 outline-none",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    div { class: "md:col-span-3 flex items-center gap-3",
                        input {
                            class: "flex-1 bg-white/10 rounded-xl px-3 py-2 outline-none",
                            placeholder: "Message",
                            required: true,
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                        button { class: "neon-btn px-4 py-2", r#type: "submit", "Send" }
                    }
                }
            }
        }
    }
}

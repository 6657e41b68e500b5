//! Admin sign-in: the setup gate, registration and login forms.

use dioxus::prelude::*;
use pixflow_types::{LoginRequest, RegisterRequest};
use tracing::debug;

use crate::app::api::{use_api, ApiResult};
use crate::app::components::AuthLayout;
use crate::app::session::use_session;
use crate::app::Route;

/// Which form the gate shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Loading,
    /// No admin exists yet
    Register,
    Login,
}

impl GateView {
    /// Pick the form from the `/admin/setup-required` answer.
    ///
    /// An unreachable backend shows the login form; the login itself will
    /// fail the same way.
    pub fn from_setup(setup: Option<&ApiResult<bool>>) -> Self {
        match setup {
            None => Self::Loading,
            Some(Ok(true)) => Self::Register,
            Some(Ok(false)) => Self::Login,
            Some(Err(e)) => {
                debug!("Setup check failed: {}", e);
                Self::Login
            }
        }
    }
}

/// `/admin-login`: registration until an admin exists, login afterwards.
#[component]
pub fn AdminGate() -> Element {
    let api = use_api();
    let setup = use_resource(move || {
        let api = api.clone();
        async move { api.setup_required().await }
    });

    let view = GateView::from_setup(setup.read().as_ref());
    match view {
        GateView::Loading => rsx! {
            div { class: "p-10", aria_busy: "true", "Loading..." }
        },
        GateView::Register => rsx! { AdminRegister {} },
        GateView::Login => rsx! { AdminLogin {} },
    }
}

/// Registration form fields: (key, placeholder, input type)
const REGISTER_FIELDS: [(&str, &str, &str); 5] = [
    ("full_name", "full name", "text"),
    ("username", "username", "text"),
    ("email", "email", "email"),
    ("password", "password", "password"),
    ("confirm", "confirm", "password"),
];

fn register_field(form: &RegisterRequest, key: &str) -> String {
    match key {
        "full_name" => form.full_name.clone(),
        "username" => form.username.clone(),
        "email" => form.email.clone(),
        "password" => form.password.clone(),
        "confirm" => form.confirm.clone(),
        _ => String::new(),
    }
}

fn set_register_field(form: &mut RegisterRequest, key: &str, value: String) {
    match key {
        "full_name" => form.full_name = value,
        "username" => form.username = value,
        "email" => form.email = value,
        "password" => form.password = value,
        "confirm" => form.confirm = value,
        _ => {}
    }
}

/// First-admin registration.
///
/// `confirm` is sent as typed; whether it must equal `password` is left to
/// the backend.
#[component]
pub fn AdminRegister() -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(RegisterRequest::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let request = form();
        spawn(async move {
            match api.register(&request).await {
                Ok(()) => {
                    session.invalidate();
                    navigator.push(Route::AdminDashboard {});
                }
                Err(e) => debug!("Registration rejected: {}", e),
            }
        });
    };

    rsx! {
        AuthLayout {
            h1 { class: "text-3xl font-bold mb-4", "Create Admin" }
            form { class: "space-y-3", onsubmit: submit,
                for (key, placeholder, kind) in REGISTER_FIELDS {
                    input {
                        key: "{key}",
                        class: "w-full bg-white/10 rounded-xl px-4 py-3",
                        r#type: kind,
                        placeholder: placeholder,
                        required: true,
                        value: register_field(&form.read(), key),
                        oninput: move |e| set_register_field(&mut form.write(), key, e.value()),
                    }
                }
                button { class: "neon-btn px-4 py-2", r#type: "submit", "Continue" }
            }
        }
    }
}

/// Admin login.
#[component]
pub fn AdminLogin() -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let request = LoginRequest {
            username: username(),
            password: password(),
        };
        spawn(async move {
            match api.login(&request).await {
                Ok(()) => {
                    session.invalidate();
                    navigator.push(Route::AdminDashboard {});
                }
                Err(e) => debug!("Login rejected: {}", e),
            }
        });
    };

    rsx! {
        AuthLayout {
            h1 { class: "text-3xl font-bold mb-4", "Admin Login" }
            form { class: "space-y-3", onsubmit: submit,
                input {
                    class: "w-full bg-white/10 rounded-xl px-4 py-3",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "w-full bg-white/10 rounded-xl px-4 py-3",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button { class: "neon-btn px-4 py-2", r#type: "submit", "Sign in" }
            }
        }
    }
}

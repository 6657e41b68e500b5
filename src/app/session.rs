//! Admin session context.
//!
//! The session cookie itself is managed by the backend. This context holds
//! what the client learned from `/admin/me` so admin views share one answer
//! instead of each re-deriving it. Provided once at the app root.

use dioxus::prelude::*;
use pixflow_types::AdminProfile;
use tracing::{debug, info};

use super::api::{use_api, ApiError, ApiResult};
use super::components::AuthLayout;
use super::Route;

/// What the client knows about the admin session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Not checked yet (or invalidated by a login)
    #[default]
    Unknown,
    /// `/admin/me` accepted the session
    Authenticated(AdminProfile),
    /// `/admin/me` rejected the session or was unreachable
    Anonymous,
}

impl SessionState {
    /// State after a `/admin/me` check
    pub fn from_check(result: Result<AdminProfile, ApiError>) -> Self {
        match result {
            Ok(profile) => Self::Authenticated(profile),
            Err(e) => {
                debug!("Admin session rejected: {}", e);
                Self::Anonymous
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Shared handle to the session state
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    /// Profile of the signed-in admin, if any
    pub fn profile(&self) -> Option<AdminProfile> {
        match self.state() {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    /// Forget the current answer so the next admin view re-checks.
    pub fn invalidate(&mut self) {
        self.state.set(SessionState::Unknown);
    }

    /// Record the backend rejecting the session (e.g. on a 401).
    pub fn expire(&mut self) {
        info!("Admin session expired");
        self.state.set(SessionState::Anonymous);
    }

    /// Expire the session when an admin call came back 401/403.
    pub fn observe<T>(&mut self, result: &ApiResult<T>) {
        if let Err(e) = result {
            if e.is_unauthorized() {
                self.expire();
            }
        }
    }

    fn resolve(&mut self, state: SessionState) {
        self.state.set(state);
    }
}

/// Initialize the session context at the app root.
pub fn use_session_provider() -> SessionContext {
    let state = use_signal(SessionState::default);
    use_context_provider(|| SessionContext { state })
}

/// Session context provided at the app root.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Renders `children` only for an authenticated admin.
///
/// Checks `/admin/me` when the session is unknown and sends anonymous
/// visitors to the login gate.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if session.state() != SessionState::Unknown {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let state = SessionState::from_check(api.me().await);
            session.resolve(state);
        });
    });

    use_effect(move || {
        if session.state() == SessionState::Anonymous {
            navigator.replace(Route::AdminGate {});
        }
    });

    if session.state().is_authenticated() {
        rsx! { {children} }
    } else {
        rsx! {
            AuthLayout {
                div { aria_busy: "true", "Loading..." }
            }
        }
    }
}

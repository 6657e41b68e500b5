//! Page components, one per route.
//!
//! Each page fetches its own data on mount through Dioxus resources; the
//! only shared state is the API client and the admin session context.

mod auth;
mod create_event;
mod dashboard;
mod event;
mod home;
mod manage_event;

pub use auth::{AdminGate, AdminLogin, AdminRegister, GateView};
pub use create_event::{parse_days, CreateEvent};
pub use dashboard::AdminDashboard;
pub use event::EventPage;
pub use home::Home;
pub use manage_event::ManageEvent;

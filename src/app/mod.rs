//! Dioxus application entry point.
//!
//! This module provides the root App component, the route table and the
//! context shared by every page.

use dioxus::prelude::*;

pub mod api;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod platform;
pub mod session;
pub mod settings;

use api::use_api_provider;
use pages::{
    AdminDashboard, AdminGate, AdminRegister, CreateEvent, EventPage, Home, ManageEvent,
};
use session::use_session_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Backend client and admin session live at the root, shared by all pages
    use_api_provider();
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/event/:slug")]
    EventPage { slug: String },
    #[route("/admin-login")]
    AdminGate {},
    #[route("/admin-register")]
    AdminRegister {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/new-event")]
    CreateEvent {},
    #[route("/admin/event/:id")]
    ManageEvent { id: String },
}

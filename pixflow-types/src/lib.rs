//! Wire types for the PixFlow backend API.
//!
//! Every type here mirrors a JSON body sent to or received from the
//! backend. The backend owns all invariants; these types only describe
//! shape. Fields decode leniently: missing and `null` values both fall back
//! to defaults.
//!
//! # Modules
//! - [`event`] - Events, photos and the admin event-management bodies
//! - [`site`] - Public site settings, monetization and the contact form
//! - [`admin`] - Setup, registration, login and the session profile

pub mod admin;
pub mod event;
pub mod site;

mod nullable;

pub use admin::{AdminProfile, LoginRequest, RegisterRequest, SetupRequired};
pub use event::{
    CoverUploaded, CreatedEvent, Event, EventDetail, EventsResponse, ExtendRequest, NewEvent,
    Photo, PhotosResponse, ACTIVE_STATUS,
};
pub use site::{AdPlacement, ContactRequest, Monetization, PublicSettings, SiteSettings};

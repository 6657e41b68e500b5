//! Event and photo types.
//!
//! An event is a time-boxed photo gallery. The backend decides expiry;
//! the client only reads `days_left` / `seconds_left` for display.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// Status string the backend uses for events that are still visible.
pub const ACTIVE_STATUS: &str = "Active";

/// A photo event as listed by `/public/events` and `/admin/events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Backend identifier (used by admin routes)
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// URL slug (used by public routes)
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// Display title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-form date string as entered by the admin
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Public URL of the cover image, if one was uploaded
    #[serde(default)]
    pub cover_url: Option<String>,

    /// Whole days until expiry
    #[serde(default)]
    pub days_left: Option<i64>,

    /// Seconds until expiry (seeds the countdown)
    #[serde(default, deserialize_with = "null_as_default")]
    pub seconds_left: i64,

    /// Number of photos uploaded to the event
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: u64,

    /// Number of downloads across all photos
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,

    /// Lifecycle status (e.g. "Active", "Expired")
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Event {
    /// Whether the backend reports this event as active
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    /// Case-insensitive substring match against the title.
    ///
    /// An empty query matches every event.
    pub fn title_matches(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Date for display, with a placeholder when unset
    pub fn date_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => placeholder,
        }
    }

    /// Cover URL, ignoring empty strings
    pub fn cover(&self) -> Option<&str> {
        self.cover_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// A single photo belonging to an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    /// Backend identifier. Photos echoed back from an upload may lack one.
    #[serde(default)]
    pub id: Option<String>,

    /// Public URL of the (possibly watermarked) image
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_url: String,
}

/// Body of `GET /public/events` and `GET /admin/events`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

/// Body of `GET /public/event/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDetail {
    pub event: Event,

    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// Body of `GET`/`POST /admin/events/{id}/photos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotosResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// Body of `POST /admin/events/{id}/cover`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverUploaded {
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Request body for `POST /admin/events`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub expiry_days: u32,
}

impl NewEvent {
    /// Expiry used when the admin does not change it
    pub const DEFAULT_EXPIRY_DAYS: u32 = 15;
}

impl Default for NewEvent {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            location: String::new(),
            expiry_days: Self::DEFAULT_EXPIRY_DAYS,
        }
    }
}

/// Response body of `POST /admin/events`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedEvent {
    pub id: String,
}

/// Request body for `POST /admin/events/{id}/extend`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtendRequest {
    pub days: u32,
}

impl ExtendRequest {
    /// Extension offered by default in the admin UI
    pub const DEFAULT_DAYS: u32 = 7;
}

//! Pure projections over fetched events and photos.

use pixflow_types::{Event, Photo};

/// Events whose title contains `query`, ignoring case, in list order.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.title_matches(query)).collect()
}

/// Summary counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_events: usize,
    pub photos_uploaded: u64,
    pub total_downloads: u64,
}

impl DashboardStats {
    /// Visitor tracking is not exposed by the backend
    pub const VISITORS_PLACEHOLDER: &'static str = "—";

    pub fn from_events(events: &[Event]) -> Self {
        events.iter().fold(Self::default(), |mut stats, event| {
            if event.is_active() {
                stats.active_events += 1;
            }
            stats.photos_uploaded += event.photos;
            stats.total_downloads += event.downloads;
            stats
        })
    }

    /// (label, value) pairs in display order
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Active Events", self.active_events.to_string()),
            ("Photos Uploaded", self.photos_uploaded.to_string()),
            ("Total Downloads", self.total_downloads.to_string()),
            ("Visitors (30d)", Self::VISITORS_PLACEHOLDER.to_string()),
        ]
    }
}

/// Put freshly uploaded photos in front of the ones already shown.
pub fn prepend_uploaded(existing: &[Photo], uploaded: Vec<Photo>) -> Vec<Photo> {
    let mut photos = uploaded;
    photos.extend_from_slice(existing);
    photos
}

/// Photos shown on the manage page: this visit's uploads, then the fetched
/// list without any photo that is already among the uploads.
///
/// The fetched list may resolve before or after an upload finishes.
pub fn with_uploads(fetched: &[Photo], uploaded: &[Photo]) -> Vec<Photo> {
    let rest: Vec<Photo> = fetched
        .iter()
        .filter(|photo| !uploaded.iter().any(|u| u.public_url == photo.public_url))
        .cloned()
        .collect();
    prepend_uploaded(&rest, uploaded.to_vec())
}

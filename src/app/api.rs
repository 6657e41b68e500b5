//! HTTP client for the PixFlow backend.
//!
//! Every view talks to the backend through [`ApiClient`], which is provided
//! once at the app root (see [`use_api_provider`]). On WASM requests go
//! through the browser's fetch; admin calls include credentials so the
//! session cookie set by `/admin/login` travels with them. Natively the
//! client keeps its own cookie store.

use dioxus::prelude::*;
use pixflow_types::{
    AdminProfile, ContactRequest, CoverUploaded, CreatedEvent, Event, EventDetail,
    EventsResponse, ExtendRequest, LoginRequest, NewEvent, Photo, PhotosResponse,
    PublicSettings, RegisterRequest, SetupRequired,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Backend origin used when none is configured at build time
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend origin baked in at build time (`PIXFLOW_BACKEND_URL`)
pub fn configured_backend_url() -> &'static str {
    option_env!("PIXFLOW_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Errors from a backend call.
///
/// Views do not distinguish these; any error collapses into the view's
/// empty or not-found state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("empty response body")]
    Empty,

    #[error("could not prepare file {name}: {reason}")]
    File { name: String, reason: String },
}

impl ApiError {
    /// Whether the backend rejected the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401) | Self::Status(403))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A file picked in the browser, read into memory for a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    fn into_part(self) -> ApiResult<Part> {
        let name = self.name.clone();
        let part = Part::bytes(self.bytes).file_name(self.name);
        match self.content_type {
            Some(mime) if !mime.is_empty() => {
                part.mime_str(&mime).map_err(|e| ApiError::File {
                    name,
                    reason: e.to_string(),
                })
            }
            _ => Ok(part),
        }
    }
}

/// Typed access to every backend endpoint the client uses.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl ApiClient {
    /// Create a client for the backend at `base` (e.g. `http://localhost:8000`).
    pub fn new(base: &str) -> ApiResult<Self> {
        let parsed = url::Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base: parsed.as_str().trim_end_matches('/').to_string(),
            http: build_http_client(),
        })
    }

    /// Client for the build-time backend, falling back to the default origin.
    pub fn from_build_env() -> Self {
        let base = configured_backend_url();
        Self::new(base).unwrap_or_else(|e| {
            warn!("{}. Using {}", e, DEFAULT_BACKEND_URL);
            Self {
                base: DEFAULT_BACKEND_URL.to_string(),
                http: build_http_client(),
            }
        })
    }

    /// Backend origin without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Link that makes the browser download a photo
    pub fn download_url(&self, photo_id: &str) -> String {
        self.url(&format!("/public/download/{}", urlencoding::encode(photo_id)))
    }

    // =========================================================================
    // Public endpoints
    // =========================================================================

    /// GET /public/settings
    pub async fn settings(&self) -> ApiResult<PublicSettings> {
        let resp = send(self.http.get(self.url("/public/settings"))).await?;
        read_json(resp).await
    }

    /// GET /public/events
    pub async fn events(&self) -> ApiResult<Vec<Event>> {
        let resp = send(self.http.get(self.url("/public/events"))).await?;
        Ok(read_json::<EventsResponse>(resp).await?.events)
    }

    /// GET /public/event/{slug}. A `null` body counts as not found.
    pub async fn event_detail(&self, slug: &str) -> ApiResult<EventDetail> {
        let path = format!("/public/event/{}", urlencoding::encode(slug));
        let resp = send(self.http.get(self.url(&path))).await?;
        read_json::<Option<EventDetail>>(resp)
            .await?
            .ok_or(ApiError::Empty)
    }

    /// POST /public/contact
    pub async fn contact(&self, request: &ContactRequest) -> ApiResult<()> {
        send(self.http.post(self.url("/public/contact")).json(request)).await?;
        Ok(())
    }

    // =========================================================================
    // Admin account
    // =========================================================================

    /// GET /admin/setup-required. True while no admin exists yet.
    pub async fn setup_required(&self) -> ApiResult<bool> {
        let resp = send(self.http.get(self.url("/admin/setup-required"))).await?;
        Ok(read_json::<SetupRequired>(resp).await?.setup)
    }

    /// POST /admin/register
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        send(self.http.post(self.url("/admin/register")).json(request)).await?;
        Ok(())
    }

    /// POST /admin/login. The backend answers with the session cookie.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        send(self.authed(self.http.post(self.url("/admin/login"))).json(request)).await?;
        Ok(())
    }

    /// GET /admin/me
    pub async fn me(&self) -> ApiResult<AdminProfile> {
        let resp = send(self.authed(self.http.get(self.url("/admin/me")))).await?;
        read_json(resp).await
    }

    // =========================================================================
    // Admin event management
    // =========================================================================

    /// GET /admin/events
    pub async fn admin_events(&self) -> ApiResult<Vec<Event>> {
        let resp = send(self.authed(self.http.get(self.url("/admin/events")))).await?;
        Ok(read_json::<EventsResponse>(resp).await?.events)
    }

    /// GET /admin/events, narrowed to one event.
    ///
    /// The backend has no single-event admin endpoint.
    pub async fn admin_event(&self, id: &str) -> ApiResult<Option<Event>> {
        let events = self.admin_events().await?;
        Ok(events.into_iter().find(|event| event.id == id))
    }

    /// POST /admin/events
    pub async fn create_event(&self, request: &NewEvent) -> ApiResult<CreatedEvent> {
        let resp = send(self.authed(self.http.post(self.url("/admin/events"))).json(request)).await?;
        read_json(resp).await
    }

    /// GET /admin/events/{id}/photos
    pub async fn event_photos(&self, id: &str) -> ApiResult<Vec<Photo>> {
        let resp = send(self.authed(self.http.get(self.url(&event_path(id, "photos"))))).await?;
        Ok(read_json::<PhotosResponse>(resp).await?.photos)
    }

    /// POST /admin/events/{id}/photos with every file under `files`.
    ///
    /// Returns the photos the backend created, newest first as sent back.
    pub async fn upload_photos(&self, id: &str, files: Vec<UploadFile>) -> ApiResult<Vec<Photo>> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file.into_part()?);
        }
        debug!("Uploading photos to event {}", id);
        let request = self.authed(self.http.post(self.url(&event_path(id, "photos"))));
        let resp = send(request.multipart(form)).await?;
        Ok(read_json::<PhotosResponse>(resp).await?.photos)
    }

    /// POST /admin/events/{id}/cover with the image under `file`.
    ///
    /// Returns the new cover URL.
    pub async fn upload_cover(&self, id: &str, file: UploadFile) -> ApiResult<Option<String>> {
        let form = Form::new().part("file", file.into_part()?);
        let request = self.authed(self.http.post(self.url(&event_path(id, "cover"))));
        let resp = send(request.multipart(form)).await?;
        Ok(read_json::<CoverUploaded>(resp).await?.cover_url)
    }

    /// POST /admin/events/{id}/extend
    pub async fn extend(&self, id: &str, days: u32) -> ApiResult<()> {
        let request = self.authed(self.http.post(self.url(&event_path(id, "extend"))));
        send(request.json(&ExtendRequest { days })).await?;
        Ok(())
    }

    /// Attach the session cookie to a request.
    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            request.fetch_credentials_include()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            request
        }
    }
}

fn event_path(id: &str, action: &str) -> String {
    format!("/admin/events/{}/{}", urlencoding::encode(id), action)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder().cookie_store(true).build().unwrap_or_else(|e| {
        warn!(
            "Failed to build HTTP client with cookie store: {}. Using default.",
            e
        );
        Client::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

/// Send a request, treating any non-2xx status as an error.
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        debug!("Backend answered {} for {}", status, resp.url());
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    if resp.status() == StatusCode::NO_CONTENT {
        return Err(ApiError::Empty);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Provide the backend client to the whole app. Call once at the root.
pub fn use_api_provider() -> ApiClient {
    use_context_provider(ApiClient::from_build_env)
}

/// Backend client provided at the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

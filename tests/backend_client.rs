//! Runs the API client against an in-process mock backend.

#![cfg(feature = "server")]

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use pixflow_types::{ContactRequest, LoginRequest, NewEvent, Photo, RegisterRequest};
use pixflow_web::app::api::{ApiClient, ApiError, UploadFile};
use pixflow_web::app::catalog::{filter_events, prepend_uploaded};
use pixflow_web::app::pages::GateView;
use pixflow_web::app::settings::SettingsState;

const SESSION_COOKIE: &str = "pixflow_session=s3cret";

/// Requests the mock backend received, for assertions
#[derive(Default)]
struct Seen {
    contact: Option<Value>,
    registered: Option<Value>,
    created: Option<Value>,
    extended: Option<Value>,
    /// (field name, file name) per multipart part
    parts: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct Backend {
    seen: Arc<Mutex<Seen>>,
    fail_contact: bool,
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

fn events_body() -> Value {
    json!({
        "events": [
            {"id": "1", "slug": "summer-gala", "title": "Summer Gala", "status": "Active",
             "photos": 12, "downloads": 40, "seconds_left": 90000, "days_left": 1},
            {"id": "2", "slug": "winter-ball", "title": "Winter Ball", "status": "Expired",
             "photos": 3, "downloads": 5}
        ]
    })
}

async fn settings() -> impl IntoResponse {
    Json(json!({
        "settings": {"background_url": "https://cdn.test/bg.jpg", "blur": 4},
        "monetization": {"ads_enabled": true, "ads_placement": "Event", "payments_enabled": false}
    }))
}

async fn event_detail(Path(slug): Path<String>) -> impl IntoResponse {
    match slug.as_str() {
        "summer-gala" => Json(json!({
            "event": {"id": "1", "slug": "summer-gala", "title": "Summer Gala", "seconds_left": 60},
            "photos": [{"id": "p1", "public_url": "https://cdn.test/p1.jpg"}]
        }))
        .into_response(),
        "vanished" => Json(Value::Null).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn contact(State(backend): State<Backend>, Json(body): Json<Value>) -> StatusCode {
    if backend.fail_contact {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    backend.seen.lock().unwrap().contact = Some(body);
    StatusCode::OK
}

async fn register(State(backend): State<Backend>, Json(body): Json<Value>) -> StatusCode {
    backend.seen.lock().unwrap().registered = Some(body);
    StatusCode::CREATED
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "ada" && body["password"] == "hunter2" {
        (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({"ok": true})),
        )
            .into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn me(headers: HeaderMap) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"username": "ada", "full_name": "Ada Lovelace"})).into_response()
}

async fn admin_events(headers: HeaderMap) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(events_body()).into_response()
}

async fn create_event(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    backend.seen.lock().unwrap().created = Some(body);
    Json(json!({"id": "42"})).into_response()
}

async fn event_photos(Path(_id): Path<String>) -> impl IntoResponse {
    Json(json!({"photos": [{"id": "old", "public_url": "https://cdn.test/old.jpg"}]}))
}

async fn record_parts(backend: &Backend, mut multipart: Multipart) -> Vec<String> {
    let mut names = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let _ = field.bytes().await.unwrap();
        backend
            .seen
            .lock()
            .unwrap()
            .parts
            .push((field_name, file_name.clone()));
        names.push(file_name);
    }
    names
}

async fn upload_photos(
    State(backend): State<Backend>,
    Path(_id): Path<String>,
    multipart: Multipart,
) -> impl IntoResponse {
    let names = record_parts(&backend, multipart).await;
    let photos: Vec<Value> = names
        .iter()
        .map(|name| json!({"public_url": format!("https://cdn.test/{name}")}))
        .collect();
    Json(json!({ "photos": photos }))
}

async fn upload_cover(
    State(backend): State<Backend>,
    Path(_id): Path<String>,
    multipart: Multipart,
) -> impl IntoResponse {
    let names = record_parts(&backend, multipart).await;
    let cover = names.first().cloned().unwrap_or_default();
    Json(json!({"cover_url": format!("https://cdn.test/covers/{cover}")}))
}

async fn extend(
    State(backend): State<Backend>,
    Path(_id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    backend.seen.lock().unwrap().extended = Some(body);
    StatusCode::OK
}

/// Start the mock backend and return a client pointed at it.
async fn spawn_backend(backend: Backend, setup: bool) -> ApiClient {
    let app = Router::new()
        .route("/public/settings", get(settings))
        .route("/public/events", get(|| async { Json(events_body()) }))
        .route("/public/event/{slug}", get(event_detail))
        .route("/public/contact", post(contact))
        .route(
            "/admin/setup-required",
            get(move || async move { Json(json!({ "setup": setup })) }),
        )
        .route("/admin/register", post(register))
        .route("/admin/login", post(login))
        .route("/admin/me", get(me))
        .route("/admin/events", get(admin_events).post(create_event))
        .route("/admin/events/{id}/photos", get(event_photos).post(upload_photos))
        .route("/admin/events/{id}/cover", post(upload_cover))
        .route("/admin/events/{id}/extend", post(extend))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(&format!("http://{addr}")).unwrap()
}

fn jpeg(name: &str) -> UploadFile {
    UploadFile {
        name: name.to_string(),
        content_type: Some("image/jpeg".to_string()),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
    }
}

#[tokio::test]
async fn test_settings_decode_and_settle() {
    let api = spawn_backend(Backend::default(), false).await;

    let state = SettingsState::settle(&api.settings().await);
    assert!(!state.loading);
    let site = state.settings.unwrap();
    assert_eq!(site.background_url.as_deref(), Some("https://cdn.test/bg.jpg"));
    assert_eq!(site.blur, Some(4.0));
    assert!(state.monetization.unwrap().ads_enabled);
}

#[tokio::test]
async fn test_unreachable_backend_settles_to_defaults() {
    // Nothing listens on the discard port
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();

    let result = api.settings().await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
    assert_eq!(SettingsState::settle(&result), SettingsState::default());
}

#[tokio::test]
async fn test_public_events_and_search() {
    let api = spawn_backend(Backend::default(), false).await;

    let events = api.events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].is_active());

    let matches = filter_events(&events, "GALA");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].slug, "summer-gala");
    assert_eq!(filter_events(&events, "").len(), 2);
}

#[tokio::test]
async fn test_event_detail_found_missing_and_null() {
    let api = spawn_backend(Backend::default(), false).await;

    let detail = api.event_detail("summer-gala").await.unwrap();
    assert_eq!(detail.event.title, "Summer Gala");
    assert_eq!(detail.event.seconds_left, 60);
    assert_eq!(detail.photos.len(), 1);

    assert!(matches!(
        api.event_detail("nope").await,
        Err(ApiError::Status(404))
    ));
    assert!(matches!(
        api.event_detail("vanished").await,
        Err(ApiError::Empty)
    ));
}

#[tokio::test]
async fn test_contact_sends_message() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), false).await;

    let request = ContactRequest {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        message: "Lovely photos".to_string(),
    };
    api.contact(&request).await.unwrap();

    let seen = backend.seen.lock().unwrap();
    let body = seen.contact.as_ref().unwrap();
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["message"], "Lovely photos");
}

#[tokio::test]
async fn test_contact_failure_is_reported() {
    let backend = Backend {
        fail_contact: true,
        ..Default::default()
    };
    let api = spawn_backend(backend, false).await;

    let result = api.contact(&ContactRequest::default()).await;
    assert!(matches!(result, Err(ApiError::Status(500))));
}

#[tokio::test]
async fn test_setup_required_picks_gate_view() {
    let api = spawn_backend(Backend::default(), true).await;
    let setup = api.setup_required().await;
    assert_eq!(GateView::from_setup(Some(&setup)), GateView::Register);

    let api = spawn_backend(Backend::default(), false).await;
    let setup = api.setup_required().await;
    assert_eq!(GateView::from_setup(Some(&setup)), GateView::Login);
}

#[tokio::test]
async fn test_login_establishes_session() {
    let api = spawn_backend(Backend::default(), false).await;

    let before = api.me().await.unwrap_err();
    assert!(before.is_unauthorized());

    let wrong = LoginRequest {
        username: "ada".to_string(),
        password: "wrong".to_string(),
    };
    assert!(api.login(&wrong).await.unwrap_err().is_unauthorized());

    let request = LoginRequest {
        username: "ada".to_string(),
        password: "hunter2".to_string(),
    };
    api.login(&request).await.unwrap();

    let profile = api.me().await.unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));

    let events = api.admin_events().await.unwrap();
    assert_eq!(events.len(), 2);
    let found = api.admin_event("2").await.unwrap().unwrap();
    assert_eq!(found.title, "Winter Ball");
    assert!(api.admin_event("99").await.unwrap().is_none());
}

#[tokio::test]
async fn test_admin_events_require_session() {
    let api = spawn_backend(Backend::default(), false).await;

    let err = api.admin_events().await.unwrap_err();
    assert!(err.is_unauthorized());

    // The manage page looks its event up through the same list
    let err = api.admin_event("1").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_register_forwards_confirm_as_typed() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), true).await;

    let request = RegisterRequest {
        full_name: "Ada Lovelace".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
        confirm: "hunter3".to_string(),
    };
    api.register(&request).await.unwrap();

    let seen = backend.seen.lock().unwrap();
    assert_eq!(
        seen.registered,
        Some(json!({
            "full_name": "Ada Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "password": "hunter2",
            "confirm": "hunter3",
        }))
    );
}

#[tokio::test]
async fn test_create_event_returns_id() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), false).await;
    api.login(&LoginRequest {
        username: "ada".to_string(),
        password: "hunter2".to_string(),
    })
    .await
    .unwrap();

    let request = NewEvent {
        title: "Launch Party".to_string(),
        location: "Rooftop".to_string(),
        ..Default::default()
    };
    let created = api.create_event(&request).await.unwrap();
    assert_eq!(created.id, "42");

    let seen = backend.seen.lock().unwrap();
    let body = seen.created.as_ref().unwrap();
    assert_eq!(body["title"], "Launch Party");
    assert_eq!(body["expiry_days"], 15);
}

#[tokio::test]
async fn test_bulk_upload_prepends_new_photos() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), false).await;

    let existing = api.event_photos("1").await.unwrap();
    assert_eq!(existing.len(), 1);

    let uploaded = api
        .upload_photos("1", vec![jpeg("a.jpg"), jpeg("b.jpg"), jpeg("c.jpg")])
        .await
        .unwrap();
    assert_eq!(uploaded.len(), 3);

    let shown = prepend_uploaded(&existing, uploaded);
    let urls: Vec<&str> = shown.iter().map(|p: &Photo| p.public_url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://cdn.test/a.jpg",
            "https://cdn.test/b.jpg",
            "https://cdn.test/c.jpg",
            "https://cdn.test/old.jpg",
        ]
    );

    let seen = backend.seen.lock().unwrap();
    assert!(seen.parts.iter().all(|(field, _)| field == "files"));
    assert_eq!(seen.parts.len(), 3);
}

#[tokio::test]
async fn test_cover_upload_uses_file_field() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), false).await;

    let cover = api.upload_cover("1", jpeg("cover.jpg")).await.unwrap();
    assert_eq!(cover.as_deref(), Some("https://cdn.test/covers/cover.jpg"));

    let seen = backend.seen.lock().unwrap();
    assert_eq!(
        seen.parts,
        vec![("file".to_string(), "cover.jpg".to_string())]
    );
}

#[tokio::test]
async fn test_extend_sends_days() {
    let backend = Backend::default();
    let api = spawn_backend(backend.clone(), false).await;

    api.extend("1", 7).await.unwrap();

    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen.extended, Some(json!({"days": 7})));
}

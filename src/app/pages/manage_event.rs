//! Manage a single event: bulk photo upload, cover upload and extending
//! visibility.

use dioxus::html::FileData;
use dioxus::prelude::*;
use pixflow_types::{Event, ExtendRequest, Photo};
use tracing::{debug, info, warn};

use super::create_event::{parse_days, MAX_DAYS, MIN_DAYS};
use crate::app::api::{use_api, ApiError, ApiResult, UploadFile};
use crate::app::catalog::{prepend_uploaded, with_uploads};
use crate::app::components::Layout;
use crate::app::platform::alert;
use crate::app::session::{use_session, AdminGuard};

/// Read a picked file into memory for upload.
async fn read_file(file: FileData) -> ApiResult<UploadFile> {
    let name = file.name();
    let bytes = file.read_bytes().await.map_err(|e| ApiError::File {
        name: name.clone(),
        reason: e.to_string(),
    })?;
    Ok(UploadFile {
        name,
        content_type: file.content_type(),
        bytes: bytes.to_vec(),
    })
}

async fn read_files(files: Vec<FileData>) -> ApiResult<Vec<UploadFile>> {
    futures::future::try_join_all(files.into_iter().map(read_file)).await
}

/// Manage event page component.
#[component]
pub fn ManageEvent(id: String) -> Element {
    rsx! {
        AdminGuard {
            ManageEventContent { id }
        }
    }
}

#[component]
fn ManageEventContent(id: String) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut current_event = use_signal(|| None::<Event>);
    // Photos uploaded during this visit, newest first
    let mut uploaded = use_signal(Vec::<Photo>::new);
    let mut cover_file = use_signal(|| None::<UploadFile>);
    let mut uploading = use_signal(|| false);

    // Event details come from the full admin list
    let event_api = api.clone();
    let event = {
        let id = id.clone();
        use_resource(use_reactive!(|(id,)| {
            let api = event_api.clone();
            async move {
                let result = api.admin_event(&id).await;
                session.observe(&result);
                result
            }
        }))
    };

    let photos_api = api.clone();
    let existing_photos = {
        let id = id.clone();
        use_resource(use_reactive!(|(id,)| {
            let api = photos_api.clone();
            async move {
                let result = api.event_photos(&id).await;
                session.observe(&result);
                result.unwrap_or_else(|e| {
                    debug!("Photo list unavailable: {}", e);
                    Vec::new()
                })
            }
        }))
    };

    // Sync fetched details into local state so a cover upload can modify it
    use_effect(move || {
        if let Some(Ok(Some(ev))) = event.read().as_ref() {
            current_event.set(Some(ev.clone()));
        }
    });

    let upload_api = api.clone();
    let upload_id = id.clone();
    let upload_photos = move |e: FormEvent| {
        let files = e.files();
        if files.is_empty() {
            return;
        }
        let api = upload_api.clone();
        let id = upload_id.clone();
        spawn(async move {
            uploading.set(true);
            let result = match read_files(files).await {
                Ok(files) => api.upload_photos(&id, files).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(photos) => {
                    info!("Uploaded {} photos to event {}", photos.len(), id);
                    let next = prepend_uploaded(&uploaded.peek(), photos);
                    uploaded.set(next);
                }
                Err(e) => warn!("Photo upload failed: {}", e),
            }
            uploading.set(false);
        });
    };

    let pick_cover = move |e: FormEvent| {
        let Some(file) = e.files().into_iter().next() else {
            cover_file.set(None);
            return;
        };
        spawn(async move {
            match read_file(file).await {
                Ok(file) => cover_file.set(Some(file)),
                Err(e) => warn!("{}", e),
            }
        });
    };

    let cover_api = api.clone();
    let cover_id = id.clone();
    let upload_cover = move |_: MouseEvent| {
        let Some(file) = cover_file() else {
            debug!("No cover file selected");
            return;
        };
        let api = cover_api.clone();
        let id = cover_id.clone();
        spawn(async move {
            match api.upload_cover(&id, file).await {
                Ok(cover_url) => {
                    if let Some(event) = current_event.write().as_mut() {
                        event.cover_url = cover_url;
                    }
                }
                Err(e) => warn!("Cover upload failed: {}", e),
            }
        });
    };

    let body = match (current_event(), event.read().as_ref()) {
        (Some(current), _) => {
            let fetched = existing_photos.read().clone().unwrap_or_default();
            let photo_list = with_uploads(&fetched, &uploaded.read());
            rsx! {
                div { class: "grid md:grid-cols-3 gap-6",
                    div { class: "md:col-span-2",
                        div { class: "glass p-4",
                            h2 { class: "text-xl font-semibold mb-3", "Photos" }
                            div { class: "border border-white/10 rounded-xl p-4 text-center",
                                input {
                                    id: "photos",
                                    class: "hidden",
                                    r#type: "file",
                                    multiple: true,
                                    accept: "image/*",
                                    onchange: upload_photos,
                                }
                                label {
                                    r#for: "photos",
                                    class: "neon-btn px-4 py-2 inline-block cursor-pointer",
                                    aria_busy: if uploading() { "true" } else { "false" },
                                    if uploading() { "Uploading..." } else { "Bulk Upload" }
                                }
                            }
                            div { class: "mt-4 columns-2 md:columns-3 gap-3",
                                for (idx, photo) in photo_list.into_iter().enumerate() {
                                    img { key: "{idx}", src: "{photo.public_url}", class: "mb-3 rounded-xl" }
                                }
                            }
                        }
                    }
                    div { class: "space-y-6",
                        div { class: "glass p-4",
                            h2 { class: "text-xl font-semibold mb-3", "Cover" }
                            if let Some(url) = current.cover() {
                                img { src: "{url}", class: "w-full h-40 object-cover rounded-xl" }
                            } else {
                                div { class: "w-full h-40 grid place-items-center bg-white/5 rounded-xl", "No cover" }
                            }
                            input {
                                class: "mt-3",
                                r#type: "file",
                                accept: "image/*",
                                onchange: pick_cover,
                            }
                            button { class: "neon-btn px-4 py-2 mt-3", onclick: upload_cover, "Upload" }
                        }
                        div { class: "glass p-4",
                            h2 { class: "text-xl font-semibold mb-3", "Visibility" }
                            ExtendVisibility { id: current.id.clone() }
                        }
                    }
                }
            }
        }
        (None, Some(Ok(None))) | (None, Some(Err(_))) => rsx! {
            div { class: "glass p-6", "Event not found." }
        },
        (None, _) => rsx! {
            div { class: "py-10", aria_busy: "true", "Loading..." }
        },
    };

    rsx! {
        Layout { title: "Manage Event".to_string(),
            section { class: "max-w-7xl mx-auto px-4", {body} }
        }
    }
}

/// Extend an event's expiry by a number of days.
///
/// Acknowledged with an alert; failures are only logged.
#[component]
fn ExtendVisibility(id: String) -> Element {
    let api = use_api();
    let mut days = use_signal(|| ExtendRequest::DEFAULT_DAYS);

    let extend = move |_: MouseEvent| {
        let api = api.clone();
        let id = id.clone();
        let days = days();
        spawn(async move {
            match api.extend(&id, days).await {
                Ok(()) => {
                    info!("Extended event {} by {} days", id, days);
                    alert("Extended!");
                }
                Err(e) => debug!("Extend failed: {}", e),
            }
        });
    };

    rsx! {
        div { class: "flex items-center gap-3",
            input {
                class: "bg-white/10 rounded-xl px-3 py-2 w-24",
                r#type: "number",
                min: "{MIN_DAYS}",
                max: "{MAX_DAYS}",
                value: "{days}",
                oninput: move |e| {
                    if let Some(value) = parse_days(&e.value()) {
                        days.set(value);
                    }
                },
            }
            button { class: "neon-btn px-4 py-2", onclick: extend, "Extend" }
        }
    }
}

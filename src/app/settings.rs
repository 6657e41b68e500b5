//! Public site settings, fetched once per view.

use dioxus::prelude::*;
use pixflow_types::{Monetization, PublicSettings, SiteSettings};
use tracing::debug;

use super::api::{use_api, ApiResult};

/// Theme and monetization toggles for the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub settings: Option<SiteSettings>,
    pub monetization: Option<Monetization>,
    pub loading: bool,
}

impl SettingsState {
    /// State before the settings request resolves
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// State once the settings request resolved. Failures settle to empty.
    pub fn settle(result: &ApiResult<PublicSettings>) -> Self {
        match result {
            Ok(public) => Self {
                settings: public.settings.clone(),
                monetization: public.monetization.clone(),
                loading: false,
            },
            Err(e) => {
                debug!("Settings unavailable: {}", e);
                Self::default()
            }
        }
    }
}

/// Fetch `/public/settings` when the calling view mounts.
pub fn use_settings() -> SettingsState {
    let api = use_api();
    let settings = use_resource(move || {
        let api = api.clone();
        async move { api.settings().await }
    });

    let state = match settings.read().as_ref() {
        None => SettingsState::loading(),
        Some(result) => SettingsState::settle(result),
    };
    state
}

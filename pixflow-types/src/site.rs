//! Public site configuration and the visitor contact form.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// Page theming controlled from the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    /// Background image URL (a gradient is used when unset)
    #[serde(default)]
    pub background_url: Option<String>,

    /// Blur radius in pixels applied to the background image
    #[serde(default)]
    pub blur: Option<f64>,

    /// Named background preset
    #[serde(default)]
    pub background_preset: Option<String>,
}

/// Where an ad banner may be rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AdPlacement {
    Homepage,
    Event,
    Sidebar,
    /// Placement this client does not know how to render
    #[default]
    #[serde(other)]
    Unknown,
}

/// Ads and paid-download toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Monetization {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ads_enabled: bool,

    #[serde(default)]
    pub ads_placement: Option<AdPlacement>,

    /// Banner image URL
    #[serde(default)]
    pub ads_asset_url: Option<String>,

    /// When set, photos are sold instead of downloaded for free
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments_enabled: bool,

    #[serde(default)]
    pub price_usd: Option<f64>,
}

impl Monetization {
    /// Banner asset to render at `placement`, if ads are on and placed there.
    pub fn ad_for(&self, placement: AdPlacement) -> Option<&str> {
        if !self.ads_enabled || self.ads_placement != Some(placement) {
            return None;
        }
        self.ads_asset_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Price shown on the buy button, zero when unset
    pub fn price(&self) -> f64 {
        self.price_usd.unwrap_or(0.0)
    }
}

/// Body of `GET /public/settings`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PublicSettings {
    #[serde(default)]
    pub settings: Option<SiteSettings>,

    #[serde(default)]
    pub monetization: Option<Monetization>,
}

/// Request body for `POST /public/contact`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ads(placement: &str, asset: Option<&str>) -> Monetization {
        serde_json::from_value(serde_json::json!({
            "ads_enabled": true,
            "ads_placement": placement,
            "ads_asset_url": asset,
        }))
        .unwrap()
    }

    #[test]
    fn test_null_toggles_are_off() {
        let m: Monetization =
            serde_json::from_str(r#"{"ads_enabled":null,"payments_enabled":null}"#).unwrap();
        assert!(!m.ads_enabled);
        assert!(!m.payments_enabled);
    }

    #[test]
    fn test_ad_for_matching_placement() {
        let m = ads("Homepage", Some("https://cdn/ad.png"));
        assert_eq!(m.ad_for(AdPlacement::Homepage), Some("https://cdn/ad.png"));
        assert_eq!(m.ad_for(AdPlacement::Event), None);
        assert_eq!(m.ad_for(AdPlacement::Sidebar), None);
    }

    #[test]
    fn test_ad_requires_enabled_and_asset() {
        let mut m = ads("Event", Some("https://cdn/ad.png"));
        m.ads_enabled = false;
        assert_eq!(m.ad_for(AdPlacement::Event), None);

        let m = ads("Event", None);
        assert_eq!(m.ad_for(AdPlacement::Event), None);

        let m = ads("Event", Some(""));
        assert_eq!(m.ad_for(AdPlacement::Event), None);
    }

    #[test]
    fn test_unknown_placement_is_tolerated() {
        let m = ads("Footer", Some("https://cdn/ad.png"));
        assert_eq!(m.ads_placement, Some(AdPlacement::Unknown));
        assert_eq!(m.ad_for(AdPlacement::Homepage), None);
    }

    #[test]
    fn test_public_settings_decoding() {
        let json = r#"{
            "settings": {"background_url": "https://cdn/bg.jpg", "blur": 6},
            "monetization": {"payments_enabled": true, "price_usd": 4.5}
        }"#;
        let s: PublicSettings = serde_json::from_str(json).unwrap();
        let settings = s.settings.unwrap();
        assert_eq!(settings.blur, Some(6.0));
        assert!(settings.background_preset.is_none());
        let m = s.monetization.unwrap();
        assert!(m.payments_enabled);
        assert_eq!(m.price(), 4.5);
        assert!(!m.ads_enabled);
    }
}

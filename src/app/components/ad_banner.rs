//! Ad banner shown when the backend places an ad at a given spot.

use dioxus::prelude::*;
use pixflow_types::{AdPlacement, Monetization};

#[component]
pub fn AdBanner(
    monetization: Option<Monetization>,
    placement: AdPlacement,
    #[props(default = "mt-6".to_string())] margin: String,
) -> Element {
    let Some(asset) = monetization
        .as_ref()
        .and_then(|m| m.ad_for(placement))
        .map(str::to_string)
    else {
        return rsx! {};
    };

    rsx! {
        div { class: "{margin} glass p-4",
            img { src: "{asset}", alt: "Sponsored", class: "w-full h-32 object-cover rounded-xl" }
        }
    }
}

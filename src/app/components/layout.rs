//! Page shells: the public layout with header and footer, and the centered
//! card used by the admin sign-in forms.

use dioxus::prelude::*;

use super::icons::{CameraIcon, LogInIcon};
use crate::app::settings::use_settings;
use crate::app::Route;

/// Blur applied to the background image when settings leave it unset
const DEFAULT_BLUR_PX: f64 = 10.0;

/// CSS for the glass/neon look (Tailwind handles the rest).
const CUSTOM_STYLES: &str = r#"
body { background: #0b0b12; color: #fff; font-family: ui-sans-serif, system-ui, sans-serif; }
.glass { background: rgba(255,255,255,.08); border: 1px solid rgba(255,255,255,.14); border-radius: 1rem; backdrop-filter: blur(14px); }
.neon-btn { border-radius: .75rem; background: linear-gradient(90deg,#ff6b6b,#a46bf2); color: #fff; font-weight: 600; box-shadow: 0 0 18px rgba(164,107,242,.45); transition: box-shadow .2s; }
.neon-btn:hover { box-shadow: 0 0 28px rgba(255,107,107,.6); }
.countdown-glow { box-shadow: 0 0 22px rgba(72,207,203,.45); }
.masonry .photo-card { break-inside: avoid; margin-bottom: 1rem; }
"#;

const FALLBACK_GRADIENT: &str = "absolute inset-0 bg-[radial-gradient(circle_at_20%_20%,rgba(255,107,107,0.3),transparent_40%),radial-gradient(circle_at_80%_30%,rgba(72,207,203,0.25),transparent_45%),radial-gradient(circle_at_50%_80%,rgba(164,107,242,0.28),transparent_40%)]";

/// Shared `<head>` elements
#[component]
fn Head(title: String) -> Element {
    rsx! {
        document::Title { "{title} - PixFlow" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Style { {CUSTOM_STYLES} }
    }
}

/// Background image from site settings, or a gradient fallback.
#[component]
pub fn NeonBackground(
    #[props(default)] background_url: Option<String>,
    #[props(default)] blur: Option<f64>,
) -> Element {
    let blur = blur.unwrap_or(DEFAULT_BLUR_PX);

    rsx! {
        div { class: "absolute inset-0 overflow-hidden",
            if let Some(url) = background_url.filter(|u| !u.is_empty()) {
                img {
                    src: "{url}",
                    alt: "bg",
                    class: "w-full h-full object-cover",
                    style: "filter: blur({blur}px); opacity: .85;",
                }
            } else {
                div { class: FALLBACK_GRADIENT }
            }
            div {
                class: "absolute inset-0",
                style: "background: linear-gradient(120deg,rgba(0,0,0,.35),rgba(0,0,0,.55));",
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout wrapping the public and admin pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let site = use_settings();
    let settings = site.settings.unwrap_or_default();

    rsx! {
        Head { title: props.title.clone() }

        div { class: "relative min-h-screen",
            NeonBackground {
                background_url: settings.background_url,
                blur: settings.blur,
            }
            header { class: "relative z-10 max-w-7xl mx-auto px-4 py-5 flex items-center justify-between",
                Link { to: Route::Home {}, class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-xl glass grid place-items-center",
                        CameraIcon { size: 22 }
                    }
                    div {
                        div { class: "font-bold text-white text-xl", "PixFlow 2025" }
                        div { class: "text-xs text-white/70 -mt-1", "Photos that live for 15 days" }
                    }
                }
                nav { class: "flex items-center gap-3",
                    Link {
                        to: Route::AdminGate {},
                        class: "neon-btn px-4 py-2 text-sm flex items-center gap-2",
                        LogInIcon { size: 16 }
                        " Admin"
                    }
                }
            }
            main { class: "relative z-10", {props.children} }
            footer { class: "relative z-10 max-w-7xl mx-auto px-4 py-10 text-white/70",
                "© 2025 PixFlow. All rights reserved."
            }
        }
    }
}

/// Centered card on the plain background, used by the sign-in forms.
#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        Head { title: "Admin".to_string() }

        div { class: "relative min-h-screen grid place-items-center",
            NeonBackground {}
            div { class: "relative z-10 glass p-8 w-full max-w-md", {children} }
        }
    }
}

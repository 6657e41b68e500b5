//! Inline SVG icons (lucide outlines).

use dioxus::prelude::*;

#[component]
fn Icon(size: u32, class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            {children}
        }
    }
}

#[component]
pub fn CameraIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        Icon { size, class: "text-white".to_string(),
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = 18)] size: u32) -> Element {
    rsx! {
        Icon { size, class: "text-white/80".to_string(),
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn ClockIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon { size, class: String::new(),
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 6v6l4 2" }
        }
    }
}

#[component]
pub fn LogInIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon { size, class: String::new(),
            path { d: "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4" }
            path { d: "m10 17 5-5-5-5" }
            path { d: "M15 12H3" }
        }
    }
}

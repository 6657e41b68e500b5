//! Live countdown to an event's expiry.
//!
//! Seeded once from the backend's `seconds_left` and decremented locally.
//! The ticking task belongs to the component scope, so it is dropped when
//! the owning view unmounts.

use std::fmt;
use std::time::Duration;

use dioxus::prelude::*;

use super::icons::ClockIcon;
use crate::app::platform::sleep;

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Seconds left until expiry, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining(u64);

impl Remaining {
    /// Negative inputs clamp to zero
    pub fn new(seconds: i64) -> Self {
        Self(u64::try_from(seconds).unwrap_or(0))
    }

    /// One second later, floored at zero
    pub fn tick(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn seconds(self) -> u64 {
        self.0
    }

    pub fn days(self) -> u64 {
        self.0 / SECS_PER_DAY
    }

    pub fn hours(self) -> u64 {
        (self.0 % SECS_PER_DAY) / SECS_PER_HOUR
    }

    pub fn minutes(self) -> u64 {
        (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE
    }
}

/// Formats as `"{days}d {hours}h {minutes}m"`; seconds are not shown.
impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days(), self.hours(), self.minutes())
    }
}

/// Countdown badge, ticking once per second.
#[component]
pub fn Countdown(seconds: i64) -> Element {
    let mut remaining = use_signal(|| Remaining::new(seconds));

    use_future(move || async move {
        while !remaining.peek().is_zero() {
            sleep(Duration::from_secs(1)).await;
            let next = remaining.peek().tick();
            remaining.set(next);
        }
    });

    rsx! {
        div { class: "countdown-glow glass px-4 py-2 inline-flex items-center gap-2",
            ClockIcon { size: 16 }
            " {remaining} left"
        }
    }
}

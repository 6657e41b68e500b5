//! Shared UI components for the PixFlow web client.

pub mod ad_banner;
pub mod contact;
pub mod countdown;
pub mod icons;
pub mod layout;

pub use ad_banner::AdBanner;
pub use contact::ContactBox;
pub use countdown::{Countdown, Remaining};
pub use icons::{ClockIcon, SearchIcon};
pub use layout::{AuthLayout, Layout, NeonBackground};

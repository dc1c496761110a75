//! Shared UI crate for the HAcapital site. The core logic and every view live
//! here; platform crates only launch the app and supply content.

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components;

/// Unified site theme, inlined by platform crates.
pub const THEME_CSS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

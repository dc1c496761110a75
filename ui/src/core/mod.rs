//! Platform-agnostic core: content model, tab state, scroll-spy, locale
//! reconciliation and the TOC gate. Components in `views`/`components` wire
//! these into Dioxus signals.

pub mod config;
pub mod content;
pub mod platform;
pub mod reconcile;
pub mod sections;
pub mod subscription;
pub mod tabs;
pub mod toc;

//! Reelfolio player crate.
//!
//! Dioxus UI, platform ports and their web/desktop adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use config::AppConfig;
pub use state::Platform;
pub use ui::app;
pub use ui::{use_platform, use_site, Route};

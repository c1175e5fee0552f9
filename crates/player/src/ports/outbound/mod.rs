//! Outbound ports - Interfaces for the host browser/webview
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the presentation layer to reach the host without depending on
//! `web-sys` or desktop APIs directly.

pub mod platform;

pub use platform::{BrowserPort, DocumentPort};

#[cfg(test)]
pub use platform::{MockBrowserPort, MockDocumentPort};

//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by the composition root (`main.rs`)
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{BrowserPort, DocumentPort};

/// Unified platform services container
///
/// Cheap to clone; every provider sits behind an `Arc`.
#[derive(Clone)]
pub struct Platform {
    document: Arc<dyn DocumentPort>,
    browser: Arc<dyn BrowserPort>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<D, B>(document: D, browser: B) -> Self
    where
        D: DocumentPort + 'static,
        B: BrowserPort + 'static,
    {
        Self {
            document: Arc::new(document),
            browser: Arc::new(browser),
        }
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Current page title, if known
    pub fn page_title(&self) -> Option<String> {
        self.document.page_title()
    }

    /// Set the page title
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    // -------------------------------------------------------------------------
    // Outbound navigation
    // -------------------------------------------------------------------------

    /// Open an external URL in a new tab
    pub fn open_in_new_tab(&self, url: &str) {
        self.browser.open_in_new_tab(url)
    }

    /// Hand a protocol URI (`mailto:`, `tel:`) to the window location
    pub fn assign_location(&self, uri: &str) {
        self.browser.assign_location(uri)
    }

    /// Host history answer for the back button, if the host knows
    pub fn can_go_back(&self) -> Option<bool> {
        self.browser.can_go_back()
    }
}

//! Page title ownership for routed pages
//!
//! A page that renames the document remembers the title it found and puts it
//! back when it goes away.

use crate::state::Platform;

/// Restores the captured page title on drop.
pub struct PageTitleGuard {
    platform: Platform,
    previous: String,
}

impl PageTitleGuard {
    /// Capture the current title; `fallback` stands in when the host has none.
    pub fn capture(platform: Platform, fallback: &str) -> Self {
        let previous = platform
            .page_title()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self { platform, previous }
    }

    pub fn set(&self, title: &str) {
        self.platform.set_page_title(title);
    }
}

impl Drop for PageTitleGuard {
    fn drop(&mut self) {
        tracing::debug!(title = %self.previous, "Restoring page title");
        self.platform.set_page_title(&self.previous);
    }
}

//! WASM platform implementations
//!
//! Provides browser implementations backed by `web-sys`.

use crate::ports::outbound::{BrowserPort, DocumentPort};
use crate::state::Platform;

/// Browser document provider (reads and writes `document.title`)
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentPort for WasmDocumentProvider {
    fn page_title(&self) -> Option<String> {
        web_sys::window()?.document().map(|doc| doc.title())
    }

    fn set_page_title(&self, title: &str) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
}

/// Browser navigation provider using `window.open` / `location.assign`
#[derive(Clone, Default)]
pub struct WasmBrowserProvider;

impl BrowserPort for WasmBrowserProvider {
    fn open_in_new_tab(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) =
            window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        {
            tracing::warn!(url, error = ?e, "window.open failed");
        }
    }

    fn assign_location(&self, uri: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().assign(uri) {
            tracing::warn!(uri, error = ?e, "location.assign failed");
        }
    }

    fn can_go_back(&self) -> Option<bool> {
        // A fresh tab opened on a deep link has exactly one entry
        let length = web_sys::window()?.history().ok()?.length().ok()?;
        Some(length > 1)
    }
}

/// Create the platform container for the browser.
pub fn create_platform() -> Platform {
    Platform::new(WasmDocumentProvider, WasmBrowserProvider)
}

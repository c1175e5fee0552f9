//! Desktop platform implementations
//!
//! The desktop shell renders inside a webview; outbound links are forwarded
//! to it through `document::eval`. The window title is owned by Dioxus
//! desktop, so page titles are only tracked in memory.

use std::sync::{Arc, RwLock};

use crate::ports::outbound::{BrowserPort, DocumentPort};
use crate::state::Platform;

/// Desktop document provider (in-memory title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider {
    title: Arc<RwLock<Option<String>>>,
}

impl DocumentPort for DesktopDocumentProvider {
    fn page_title(&self) -> Option<String> {
        self.title.read().ok().and_then(|t| t.clone())
    }

    fn set_page_title(&self, title: &str) {
        tracing::debug!(title, "Page title changed");
        if let Ok(mut current) = self.title.write() {
            *current = Some(title.to_string());
        }
    }
}

/// Desktop navigation provider (delegates to the webview)
#[derive(Clone, Default)]
pub struct DesktopBrowserProvider;

impl DesktopBrowserProvider {
    fn run(&self, template: impl FnOnce(&str) -> String, target: &str) {
        // JSON string literals are valid JS string literals
        match serde_json::to_string(target) {
            Ok(literal) => {
                let _ = dioxus::document::eval(&template(&literal));
            }
            Err(e) => tracing::warn!(target, error = %e, "Could not encode link target"),
        }
    }
}

impl BrowserPort for DesktopBrowserProvider {
    fn open_in_new_tab(&self, url: &str) {
        self.run(
            |literal| format!("window.open({literal}, '_blank', 'noopener,noreferrer');"),
            url,
        );
    }

    fn assign_location(&self, uri: &str) {
        self.run(|literal| format!("window.location.assign({literal});"), uri);
    }

    fn can_go_back(&self) -> Option<bool> {
        // The router's in-memory history is the only history
        None
    }
}

/// Create the platform container for desktop.
pub fn create_platform() -> Platform {
    Platform::new(DesktopDocumentProvider::default(), DesktopBrowserProvider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title_round_trip() {
        let provider = DesktopDocumentProvider::default();
        assert_eq!(provider.page_title(), None);
        provider.set_page_title("Flagship Projects · Ada");
        assert_eq!(
            provider.page_title().as_deref(),
            Some("Flagship Projects · Ada")
        );
    }

    #[test]
    fn test_clones_share_title() {
        let provider = DesktopDocumentProvider::default();
        let clone = provider.clone();
        provider.set_page_title("Shared");
        assert_eq!(clone.page_title().as_deref(), Some("Shared"));
    }

    #[test]
    fn test_back_defers_to_router_history() {
        assert_eq!(DesktopBrowserProvider.can_go_back(), None);
    }
}

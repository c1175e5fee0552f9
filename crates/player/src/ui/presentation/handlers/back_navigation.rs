//! Back button on detail pages
//!
//! A detail page opened directly (fresh tab, shared link) has nothing to go
//! back to, so the button replaces the location with `/` instead. The host
//! history is authoritative when it can answer; otherwise the router decides.

use reelfolio_domain::BackAction;

use crate::state::Platform;

/// Choose the back action from the host history, falling back to
/// `router_can_go_back`.
pub fn back_action(platform: &Platform, router_can_go_back: bool) -> BackAction {
    let can_go_back = platform.can_go_back().unwrap_or(router_can_go_back);
    BackAction::choose(can_go_back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockBrowserPort, MockDocumentPort};

    fn platform_reporting(history: Option<bool>) -> Platform {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_can_go_back()
            .times(1)
            .return_const(history);
        Platform::new(MockDocumentPort::new(), browser)
    }

    #[test]
    fn test_fresh_tab_replaces_home_even_if_router_says_back() {
        let platform = platform_reporting(Some(false));
        assert_eq!(back_action(&platform, true), BackAction::ReplaceHome);
    }

    #[test]
    fn test_host_history_goes_back() {
        let platform = platform_reporting(Some(true));
        assert_eq!(back_action(&platform, false), BackAction::HistoryBack);
    }

    #[test]
    fn test_unknown_host_history_uses_router() {
        assert_eq!(
            back_action(&platform_reporting(None), true),
            BackAction::HistoryBack
        );
        assert_eq!(
            back_action(&platform_reporting(None), false),
            BackAction::ReplaceHome
        );
    }
}

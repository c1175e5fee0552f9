//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract browser operations so that:
//! 1. Presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Link and title handling is testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

/// Browser document operations (page title)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentPort: Send + Sync {
    /// Current page title, if the platform has one
    fn page_title(&self) -> Option<String>;

    /// Set the page title
    fn set_page_title(&self, title: &str);
}

/// Outbound navigation that leaves the app
#[cfg_attr(test, mockall::automock)]
pub trait BrowserPort: Send + Sync {
    /// Open `url` in a new tab with `noopener,noreferrer`
    fn open_in_new_tab(&self, url: &str);

    /// Assign the window location (hands `mailto:`/`tel:` to the OS)
    fn assign_location(&self, uri: &str);

    /// Whether the host session history has an entry before this one.
    ///
    /// `None` when the host cannot tell; the router's own history decides.
    fn can_go_back(&self) -> Option<bool>;
}

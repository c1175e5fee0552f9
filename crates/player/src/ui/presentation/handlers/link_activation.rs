//! Link activation
//!
//! Cards, nav items, hero actions and footer links all activate a [`Link`]
//! the same way: internal routes go through the router, web links open a new
//! tab, and `mailto:`/`tel:` URIs are handed to the window location.

use reelfolio_domain::Link;

use crate::routes::Route;
use crate::state::Platform;

/// Perform the side effect for `link`.
///
/// Returns the route to push when the link stays inside the app.
pub fn activate_link(link: &Link, platform: &Platform) -> Option<Route> {
    if let Some(slug) = link.route_slug() {
        tracing::debug!(slug, "Navigating to detail page");
        return Some(Route::DetailRoute {
            slug: slug.to_string(),
        });
    }

    let href = link.href();
    if link.is_protocol_handoff() {
        platform.assign_location(href);
    } else if link.opens_in_new_tab() {
        tracing::debug!(url = %href, "Opening external link");
        platform.open_in_new_tab(href);
    } else {
        tracing::debug!(href = %href, "Link has no in-app target");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockBrowserPort, MockDocumentPort};
    use mockall::predicate::eq;

    fn platform_with(browser: MockBrowserPort) -> Platform {
        Platform::new(MockDocumentPort::new(), browser)
    }

    #[test]
    fn test_internal_link_routes_without_browser_calls() {
        let mut browser = MockBrowserPort::new();
        browser.expect_open_in_new_tab().never();
        browser.expect_assign_location().never();
        let platform = platform_with(browser);

        let route = activate_link(&Link::Internal("/details/education".into()), &platform);

        assert_eq!(
            route,
            Some(Route::DetailRoute {
                slug: "education".into()
            })
        );
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_open_in_new_tab()
            .with(eq("https://github.com/example"))
            .times(1)
            .return_const(());
        browser.expect_assign_location().never();
        let platform = platform_with(browser);

        let route = activate_link(&Link::External("https://github.com/example".into()), &platform);

        assert_eq!(route, None);
    }

    #[test]
    fn test_mail_and_phone_assign_location() {
        let mut browser = MockBrowserPort::new();
        browser.expect_open_in_new_tab().never();
        browser
            .expect_assign_location()
            .with(eq("mailto:someone@example.com"))
            .times(1)
            .return_const(());
        browser
            .expect_assign_location()
            .with(eq("tel:+15550100"))
            .times(1)
            .return_const(());
        let platform = platform_with(browser);

        assert_eq!(
            activate_link(&Link::Mail("mailto:someone@example.com".into()), &platform),
            None
        );
        assert_eq!(
            activate_link(&Link::Phone("tel:+15550100".into()), &platform),
            None
        );
    }
}

use dioxus::prelude::*;
use std::sync::Arc;

use reelfolio_domain::Site;

use crate::state::Platform;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the validated site manifest
pub fn use_site() -> Arc<Site> {
    use_context::<Arc<Site>>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Platform and Site are provided by the composition root
    // (see `crates/player/src/main.rs`). Session state must be created
    // inside an active Dioxus runtime.
    use_context_provider(presentation::state::SessionStore::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        div {
            class: "app-shell",
            Router::<routes::Route> {}
        }
    }
}

//! Profile picker shown before anything else

use dioxus::prelude::*;

use reelfolio_domain::Profile;

use crate::presentation::state::use_session_store;
use crate::use_site;

/// "Who's watching?" grid
#[component]
pub fn ProfileSelect() -> Element {
    let site = use_site();

    rsx! {
        div {
            class: "profile-select",

            h1 { class: "profile-select-title", "Who's watching?" }

            div {
                class: "profile-grid",
                for profile in site.profiles.iter() {
                    ProfileCard {
                        key: "{profile.id}",
                        profile: profile.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub profile: Profile,
}

#[component]
fn ProfileCard(props: ProfileCardProps) -> Element {
    let mut store = use_session_store();
    let profile = props.profile.clone();
    let alt = props.profile.avatar_alt();

    rsx! {
        button {
            class: "profile-card",
            style: "--accent-color: {props.profile.accent.as_str()}",
            onclick: move |_| {
                let _ = store.select_profile(profile.clone());
            },

            img {
                class: "profile-avatar",
                src: "{props.profile.artwork_url}",
                alt: "{alt}",
            }
            span { class: "profile-name", "{props.profile.display_name}" }
        }
    }
}

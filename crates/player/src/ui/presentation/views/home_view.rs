//! Home view - header, hero, catalog rows and footer

use dioxus::prelude::*;

use reelfolio_domain::Profile;

use crate::presentation::components::home::{
    CatalogRowView, HeroBanner, HomeHeader, QuickLinksFooter,
};
use crate::use_site;

#[derive(Props, Clone, PartialEq)]
pub struct HomeViewProps {
    /// Profile chosen on the selector
    pub profile: Profile,
}

#[component]
pub fn HomeView(props: HomeViewProps) -> Element {
    let site = use_site();

    rsx! {
        div {
            class: "home-view",
            style: "--accent-color: {props.profile.accent.as_str()}",

            HomeHeader { profile: props.profile.clone() }
            HeroBanner { hero: site.hero.clone() }

            main {
                class: "catalog",
                for row in site.rows.iter() {
                    CatalogRowView { key: "{row.id}", row: row.clone() }
                }
            }

            QuickLinksFooter {}
        }
    }
}

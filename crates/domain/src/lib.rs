extern crate self as reelfolio_domain;

pub mod common;

pub mod assets;
pub mod entities;
pub mod error;
pub mod intro;
pub mod manifest;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod value_objects;

pub use assets::{AssetResolver, BasePath};
pub use entities::{
    quick_links, CatalogItem, CatalogRow, Hero, HeroAction, NavItem, NavLink, Profile, RowLayout,
};
pub use error::SiteError;
pub use intro::{IntroCommand, IntroPlayback};
pub use manifest::Site;
pub use navigation::{detail_outcome, BackAction, DetailOutcome};
pub use routes::{RouteEntry, RouteTable};
pub use session::{IntroExit, NavigationSession, RootView, SessionPhase, Transition};
pub use value_objects::{AccentColor, Link};

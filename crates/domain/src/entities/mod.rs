//! Static site entities, built once from the manifest and never mutated

mod catalog;
mod nav;
mod profile;

pub use catalog::{CatalogItem, CatalogRow, Hero, HeroAction, RowLayout};
pub use nav::{quick_links, NavItem, NavLink};
pub use profile::Profile;

//! Home screen building blocks

pub mod footer;
pub mod header;
pub mod hero;
pub mod rows;

pub use footer::QuickLinksFooter;
pub use header::HomeHeader;
pub use hero::HeroBanner;
pub use rows::CatalogRowView;

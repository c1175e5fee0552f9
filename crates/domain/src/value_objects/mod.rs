//! Value objects: validated, immutable building blocks of the site manifest

mod accent;
mod link;

pub use accent::AccentColor;
pub use link::Link;

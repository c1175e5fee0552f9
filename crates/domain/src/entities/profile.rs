//! Viewer profiles shown on the "Who's watching?" screen

use crate::value_objects::AccentColor;

/// A selectable viewer persona. Purely cosmetic; created once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    /// Resolved avatar URL
    pub artwork_url: String,
    pub accent: AccentColor,
}

impl Profile {
    /// Alt text for the avatar image
    pub fn avatar_alt(&self) -> String {
        format!("{} avatar", self.display_name)
    }
}

//! Validated profile accent color

use regex_lite::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::SiteError;

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex")
});

/// A CSS hex color (`#rgb` or `#rrggbb`), used for the profile card highlight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    /// Create a validated accent color.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::InvalidAccent` when `value` is not a hex literal.
    pub fn new(profile: &str, value: impl Into<String>) -> Result<Self, SiteError> {
        let value = value.into();
        let trimmed = value.trim();
        if !HEX_COLOR_RE.is_match(trimmed) {
            return Err(SiteError::InvalidAccent {
                profile: profile.to_string(),
                value,
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> String {
        color.0
    }
}

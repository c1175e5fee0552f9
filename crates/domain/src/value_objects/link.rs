//! Link targets for catalog items, hero actions and nav entries
//!
//! The variant decides how a click is handled:
//! - `Internal` → client-side router navigation
//! - `External` → new browser tab (`noopener,noreferrer`)
//! - `Mail` / `Phone` → assigned to the window location so the OS handler opens

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::starts_with_ignore_ascii_case;
use crate::routes::DETAILS_PREFIX;

const MAILTO_PREFIX: &str = "mailto:";
const TEL_PREFIX: &str = "tel:";

/// A classified link target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum Link {
    /// In-app route path such as `/details/education`
    Internal(String),
    /// Absolute URL opened in a new tab
    External(String),
    /// `mailto:` URI
    Mail(String),
    /// `tel:` URI
    Phone(String),
}

impl Link {
    /// Classify an already-resolved target string.
    ///
    /// Returns `None` for blank input so items without a link stay inert.
    pub fn classify(target: &str) -> Option<Self> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }

        let link = if starts_with_ignore_ascii_case(target, MAILTO_PREFIX) {
            Self::Mail(target.to_string())
        } else if starts_with_ignore_ascii_case(target, TEL_PREFIX) {
            Self::Phone(target.to_string())
        } else if target.starts_with(DETAILS_PREFIX) {
            Self::Internal(target.to_string())
        } else {
            Self::External(target.to_string())
        };
        Some(link)
    }

    /// The raw href, suitable for an `<a href>` attribute.
    pub fn href(&self) -> &str {
        match self {
            Self::Internal(href) | Self::External(href) | Self::Mail(href) | Self::Phone(href) => {
                href
            }
        }
    }

    /// Whether an anchor for this link should carry `target="_blank"`.
    pub fn opens_in_new_tab(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Whether activating this link hands off to an OS protocol handler.
    pub fn is_protocol_handoff(&self) -> bool {
        matches!(self, Self::Mail(_) | Self::Phone(_))
    }

    /// Detail-route slug for internal links, if any.
    pub fn route_slug(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => crate::routes::slug_from_path(path),
            _ => None,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.href())
    }
}

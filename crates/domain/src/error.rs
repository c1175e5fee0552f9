//! Unified error types for the domain layer
//!
//! Every failure here happens while turning the embedded site manifest into
//! validated configuration. Nothing at runtime (resolution, routing, session
//! transitions) is fallible.

use thiserror::Error;

/// Unified error type for site configuration
#[derive(Debug, Error)]
pub enum SiteError {
    /// The manifest is not valid JSON or does not match the expected shape
    #[error("Manifest parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Validation failed (e.g., empty identifiers)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Two entries of the same kind share an identifier
    #[error("Duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },

    /// An accent color is not a `#rgb` or `#rrggbb` hex literal
    #[error("Invalid accent color for profile {profile}: {value}")]
    InvalidAccent { profile: String, value: String },

    /// An internal link points at a slug the route table does not know
    #[error("Link {link} in {owner} targets unknown route")]
    UnknownRoute { owner: String, link: String },
}

impl SiteError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate id error
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = SiteError::validation("profile id cannot be empty");
        assert!(matches!(err, SiteError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: profile id cannot be empty"
        );
    }

    #[test]
    fn test_duplicate_error() {
        let err = SiteError::duplicate("route", "education");
        assert_eq!(err.to_string(), "Duplicate route id: education");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = match serde_json::from_str::<serde_json::Value>("{") {
            Err(e) => e,
            Ok(_) => panic!("truncated JSON must not parse"),
        };
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Parse(_)));
        assert!(err.to_string().starts_with("Manifest parse failed"));
    }
}

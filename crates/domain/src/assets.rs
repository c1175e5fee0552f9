//! Asset URL resolution
//!
//! Maps logical asset paths (as written in the site manifest, e.g.
//! `assets/v.mp4`) to URLs the browser can fetch. Resolution order:
//!
//! 1. empty input → empty string
//! 2. exact hit in the remote object-store map → mapped URL verbatim
//! 3. input with a protocol (`scheme://`, `//`) or a `mailto:`/`tel:`/`data:`
//!    prefix → unchanged
//! 4. anything else → joined onto the configured base path
//!
//! A mistyped logical path is not an error: it falls through to step 4 and
//! yields a base-relative URL.

use regex_lite::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::common::starts_with_ignore_ascii_case;

static PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-z]+:)?//").expect("valid regex"));

const SPECIAL_PREFIXES: [&str; 3] = ["mailto:", "tel:", "data:"];

/// Deployment base path, always ending in exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize a configured base path. Blank input means the site root.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        Self(format!("{trimmed}/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` if `path` already carries a protocol or special URI prefix.
pub fn is_absolute_or_special(path: &str) -> bool {
    PROTOCOL_RE.is_match(path)
        || SPECIAL_PREFIXES
            .iter()
            .any(|prefix| starts_with_ignore_ascii_case(path, prefix))
}

/// Pure resolver from logical asset paths to deliverable URLs.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base: BasePath,
    remote: HashMap<String, String>,
}

impl AssetResolver {
    pub fn new(base: BasePath, remote: HashMap<String, String>) -> Self {
        Self { base, remote }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Number of entries in the remote asset map.
    pub fn remote_len(&self) -> usize {
        self.remote.len()
    }

    /// Resolve a logical path. Deterministic and side-effect free.
    pub fn resolve(&self, logical_path: &str) -> String {
        if logical_path.is_empty() {
            return String::new();
        }

        if let Some(mapped) = self.remote.get(logical_path) {
            return mapped.clone();
        }

        if is_absolute_or_special(logical_path) {
            return logical_path.to_string();
        }

        let relative = logical_path.strip_prefix('/').unwrap_or(logical_path);
        format!("{}{}", self.base.as_str(), relative)
    }

    /// Resolve an optional manifest field, dropping paths that resolve empty.
    pub fn resolve_opt(&self, logical_path: Option<&str>) -> Option<String> {
        logical_path
            .map(|path| self.resolve(path))
            .filter(|url| !url.is_empty())
    }
}

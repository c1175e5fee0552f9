//! Application configuration
//!
//! The only tunable is the base path static assets are served under.
//! Native builds read `PORTFOLIO_BASE_PATH` at runtime and fall back to the
//! value baked in at compile time; web builds only have the compile-time value.

use reelfolio_domain::BasePath;

/// Environment variable holding the deployment base path (e.g. `/portfolio/`).
pub const BASE_PATH_ENV: &str = "PORTFOLIO_BASE_PATH";

const BUILD_BASE_PATH: Option<&str> = option_env!("PORTFOLIO_BASE_PATH");

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub base_path: BasePath,
}

impl AppConfig {
    /// Load configuration for the current target.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|_| None)
        }
    }

    /// Build from a variable lookup, falling back to the compile-time value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let raw = lookup(BASE_PATH_ENV).or_else(|| BUILD_BASE_PATH.map(str::to_string));

        let base_path = match raw {
            Some(raw) => BasePath::new(&raw),
            None => BasePath::default(),
        };
        tracing::debug!(base_path = %base_path.as_str(), "Configuration loaded");

        Self { base_path }
    }
}

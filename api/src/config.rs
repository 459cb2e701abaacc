use std::env;

use crate::app::feed_composer::{DEFAULT_TOP_VIEWED, MAX_TOP_VIEWED};

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Optional JSON file used to pre-populate the content store
    pub seed_path: Option<String>,
    /// Size of the top-viewed widget when the request gives no limit
    pub top_viewed_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            seed_path: None,
            top_viewed_limit: DEFAULT_TOP_VIEWED,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed_path: lookup("SEED_PATH").filter(|p| !p.is_empty()),
            top_viewed_limit: lookup("TOP_VIEWED_LIMIT")
                .and_then(|n| parse_top_viewed_limit(&n))
                .unwrap_or(defaults.top_viewed_limit),
        }
    }
}

/// The widget size must be usable as a request default, so it has to sit
/// in `1..=MAX_TOP_VIEWED`.
fn parse_top_viewed_limit(raw: &str) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(n) if (1..=MAX_TOP_VIEWED).contains(&n) => Some(n),
        _ => {
            tracing::warn!(
                value = raw,
                max = MAX_TOP_VIEWED,
                "Ignoring TOP_VIEWED_LIMIT outside 1..=max, using default"
            );
            None
        }
    }
}

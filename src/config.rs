//! Runtime settings read from the environment.

use std::env;
use std::path::PathBuf;

pub const FIXTURES_DIR_VAR: &str = "LESSONS_FIXTURES_DIR";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory holding `good.json` and `malformed.json`.
    pub fixtures_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fixtures_dir: default_fixtures_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        Settings {
            fixtures_dir: get(FIXTURES_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.fixtures_dir),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

//! App configuration
//!
//! Everything is fixed at build time; wasm has no environment to read at
//! runtime. Set `CASTLIST_LOG` when building to change the log level.

use tracing::Level;

/// Cast list resource, resolved against the page URL.
pub const CAST_JSON_PATH: &str = "cast.json";

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Provided to the component tree as context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub cast_path: &'static str,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cast_path: CAST_JSON_PATH,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: parse_log_level(option_env!("CASTLIST_LOG")),
            ..Self::default()
        }
    }
}

/// Unset or unrecognised values fall back to `info`.
fn parse_log_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

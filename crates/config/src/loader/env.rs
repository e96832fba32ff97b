//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `OMARCHY_MANUAL_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Validating theme and page names (done once in `ConfigLoader::build`).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Malformed numeric or boolean values return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_HINT_TTL_MS, ENV_PAGE, ENV_SKIP_INTRO, ENV_THEME};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parses a boolean flag, accepting `true`/`false`, `1`/`0`, and `yes`/`no`.
pub(crate) fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        loader.set_theme(Some(theme));
    }
    if let Some(page) = env_var_or_none(ENV_PAGE) {
        loader.set_page(Some(page));
    }
    if let Some(ttl) = env_var_or_none(ENV_HINT_TTL_MS) {
        let ms: u64 = ttl.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_HINT_TTL_MS.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_hint_ttl_ms(Some(ms));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_INTRO) {
        loader.set_skip_intro(Some(parse_flag(ENV_SKIP_INTRO, &skip)?));
    }
    Ok(())
}

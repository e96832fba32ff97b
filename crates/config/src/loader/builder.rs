//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Validate theme, page, and hint TTL values and build the final `ManualConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Unknown theme and page names are errors here, unlike runtime theme switching.

use std::time::Duration;

use super::defaults::ManualConfig;
use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{MAX_HINT_TTL_MS, MIN_HINT_TTL_MS};
use crate::types::{ActiveTheme, Page};

/// Configuration loader that merges defaults, `.env`, environment, and CLI values.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<String>,
    page: Option<String>,
    hint_ttl_ms: Option<u64>,
    skip_intro: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the startup theme by name.
    pub fn with_theme(mut self, name: String) -> Self {
        self.theme = Some(name);
        self
    }

    /// Set the startup page (title, slug, or 1-based number).
    pub fn with_page(mut self, page: String) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the hint lifetime in milliseconds.
    pub fn with_hint_ttl_ms(mut self, ms: u64) -> Self {
        self.hint_ttl_ms = Some(ms);
        self
    }

    /// Set whether the intro splash is skipped.
    pub fn with_skip_intro(mut self, skip: bool) -> Self {
        self.skip_intro = Some(skip);
        self
    }

    /// Validate the collected values and build the final configuration.
    pub fn build(self) -> Result<ManualConfig, ConfigError> {
        let defaults = ManualConfig::default();

        let theme = match self.theme {
            Some(name) => {
                ActiveTheme::from_name(&name).ok_or(ConfigError::UnknownTheme(name))?
            }
            None => defaults.theme,
        };

        let start_page = match self.page {
            Some(page) => page.parse::<Page>()?,
            None => defaults.start_page,
        };

        let hint_ttl = match self.hint_ttl_ms {
            Some(ms) => Self::validate_hint_ttl(ms)?,
            None => defaults.hint_ttl,
        };

        let config = ManualConfig {
            theme,
            start_page,
            hint_ttl,
            skip_intro: self.skip_intro.unwrap_or(defaults.skip_intro),
        };
        tracing::info!(
            theme = config.theme.name(),
            page = config.start_page.title(),
            hint_ttl_ms = config.hint_ttl.as_millis() as u64,
            skip_intro = config.skip_intro,
            "Configuration resolved"
        );
        Ok(config)
    }

    fn validate_hint_ttl(ms: u64) -> Result<Duration, ConfigError> {
        if ms < MIN_HINT_TTL_MS {
            return Err(ConfigError::InvalidHintTtl {
                message: format!("must be at least {} ms (got {})", MIN_HINT_TTL_MS, ms),
            });
        }
        if ms > MAX_HINT_TTL_MS {
            return Err(ConfigError::InvalidHintTtl {
                message: format!("must be at most {} ms (got {})", MAX_HINT_TTL_MS, ms),
            });
        }
        Ok(Duration::from_millis(ms))
    }

    pub fn theme(&self) -> Option<&String> {
        self.theme.as_ref()
    }

    pub fn page(&self) -> Option<&String> {
        self.page.as_ref()
    }

    pub fn hint_ttl_ms(&self) -> Option<u64> {
        self.hint_ttl_ms
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
    }

    pub(crate) fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }

    pub(crate) fn set_hint_ttl_ms(&mut self, ms: Option<u64>) {
        self.hint_ttl_ms = ms;
    }

    pub(crate) fn set_skip_intro(&mut self, skip: Option<bool>) {
        self.skip_intro = skip;
    }
}

// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::slug::locale::LOCALE_DELIMITER;

/// Process-wide slugging settings.
///
/// Slug field declarations live on each record type; these settings only
/// carry what is global to the process: whether per-locale slug variants are
/// produced, and for which locales.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlugSettings {
    localized: bool,
    supported_locales: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl SlugSettings {
    /// Settings for single-locale operation. Always valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for per-locale slug variants. The locale list is required
    /// and validated up front; slugging never starts with a bad locale set.
    pub fn localized(supported_locales: Vec<String>) -> Result<Self, ConfigError> {
        let settings = Self {
            localized: true,
            supported_locales,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Build settings from environment variables. Uses `SLUG_LOCALIZED`
    /// (`1`/`true` to enable) and `SLUG_SUPPORTED_LOCALES` (comma-separated
    /// locale codes, required when localized mode is on).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let localized = env::var("SLUG_LOCALIZED")
            .ok()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let supported_locales: Vec<String> = env::var("SLUG_SUPPORTED_LOCALES")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let settings = Self {
            localized,
            supported_locales,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.localized && self.supported_locales.is_empty() {
            return Err(ConfigError::Missing("SLUG_SUPPORTED_LOCALES"));
        }
        for locale in &self.supported_locales {
            if locale.is_empty() || locale.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "locale code {locale:?} must be non-empty and contain no whitespace"
                )));
            }
            if locale.contains(LOCALE_DELIMITER) {
                return Err(ConfigError::Invalid(format!(
                    "locale code {locale:?} must not contain {LOCALE_DELIMITER:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn is_localized(&self) -> bool {
        self.localized
    }

    pub fn supported_locales(&self) -> &[String] {
        &self.supported_locales
    }
}

//! General application configuration.

use deck_locale::Locale;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default locale segment for unprefixed paths.
fn default_locale() -> String {
    deck_locale::DEFAULT.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Locale inserted into paths that carry none. Must name a supported
    /// locale; validated at use sites via [`Self::locale`].
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Override path for the persisted session record. Empty means the
    /// platform default (`~/.config/taskdeck/session.json`).
    #[serde(default)]
    pub session_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            session_file: String::new(),
        }
    }
}

impl GeneralConfig {
    /// Parse the configured default locale against the supported set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the configured string does
    /// not name a supported locale.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        self.default_locale
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: "general.default_locale".to_string(),
                reason: format!("'{}' is not a supported locale", self.default_locale),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_locale_is_en() {
        let config = GeneralConfig::default();
        assert_eq!(config.locale().expect("valid"), Locale::En);
    }

    #[test]
    fn unsupported_locale_is_rejected() {
        let config = GeneralConfig {
            default_locale: "de".to_string(),
            session_file: String::new(),
        };
        let err = config.locale().expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}

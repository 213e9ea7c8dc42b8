//! # deck-config
//!
//! Figment-layered configuration for the `tkd` binary.
//!
//! Sources merge from weakest to strongest: built-in defaults, the
//! user-level file (`~/.config/taskdeck/config.toml`), the project-level
//! `.taskdeck/config.toml`, and finally `TASKDECK_*` environment variables.
//! An env var names its section with a double underscore, so
//! `TASKDECK_API__BASE_URL` sets `api.base_url` and
//! `TASKDECK_GENERAL__DEFAULT_LOCALE` sets `general.default_locale`.
//!
//! Every field has a usable default; a `tkd` run with no config files and a
//! clean environment talks to the local development server in English.

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeckConfig {
    /// Load from TOML files and environment variables, skipping `.env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load a workspace `.env` into the environment first, then [`Self::load`].
    /// The CLI entry point.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// The provider chain, weakest layer first. Public so tests can extract
    /// from it directly or stack extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".taskdeck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TASKDECK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskdeck").join("config.toml"))
    }

    /// Best-effort `.env` loading: walk up from the crate manifest toward
    /// the workspace root, stop at the first `.env`, and fall back to the
    /// current directory. A missing file is not an error.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_locale::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = DeckConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.general.default_locale, "en");
        assert!(config.general.session_file.is_empty());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TASKDECK_API__BASE_URL", "https://deck.example.com/api");
            jail.set_env("TASKDECK_GENERAL__DEFAULT_LOCALE", "tr");

            let config: DeckConfig = DeckConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://deck.example.com/api");
            assert_eq!(
                config.general.locale().expect("valid locale"),
                Locale::Tr
            );
            Ok(())
        });
    }

    #[test]
    fn toml_layer_merges_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".taskdeck")?;
            jail.create_file(
                ".taskdeck/config.toml",
                r#"
                [api]
                base_url = "https://toml.example.com/api"
                timeout_secs = 5
                "#,
            )?;
            jail.set_env("TASKDECK_API__BASE_URL", "https://env.example.com/api");

            let config: DeckConfig = DeckConfig::figment().extract()?;
            // Env wins over TOML; TOML wins over defaults.
            assert_eq!(config.api.base_url, "https://env.example.com/api");
            assert_eq!(config.api.timeout_secs, 5);
            Ok(())
        });
    }
}

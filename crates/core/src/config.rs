//! Application configuration.
//!
//! Resolved once at process start: built-in defaults, then an optional
//! `meeple.toml` under the user config directory, then `MEEPLE_*`
//! environment variables. Nothing re-reads configuration at runtime.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::i18n::DEFAULT_LOCALE;

const ENV_PREFIX: &str = "MEEPLE";

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Serve the bundled fixture data instead of calling a backend.
    pub use_mock: bool,
    /// Base URL of the REST backend, e.g. `http://localhost:3000/api`.
    pub api_base_url: String,
    /// UI locale, one of the supported locale codes.
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_mock: true,
            api_base_url: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// Directory holding the configuration file.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meeple"))
    }

    /// Path of the configuration file, when a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("meeple.toml"))
    }

    /// Load the layered configuration.
    pub fn load() -> Result<Self> {
        Self::load_with(Self::config_path())
    }

    /// Load using an explicit file path instead of the default location.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with(Some(path.into()))
    }

    fn load_with(path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("use_mock", true)?
            .set_default("api_base_url", "")?
            .set_default("locale", DEFAULT_LOCALE)?;

        if let Some(path) = path.filter(|path| path.exists()) {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = builder
            .build()
            .context("failed to assemble configuration")?;
        config
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}

/// Write a commented default configuration file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let Some(path) = AppConfig::config_path() else {
        return Ok(());
    };
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }

    let contents = format!(
        "# Meeple configuration.\n\
         #\n\
         # use_mock = true serves the bundled fixture library; set it to\n\
         # false and point api_base_url at a running backend to go remote.\n\
         use_mock = true\n\
         api_base_url = \"\"\n\
         locale = \"{DEFAULT_LOCALE}\"\n"
    );
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = AppConfig::load_from("/definitely/not/here/meeple.toml").unwrap();
        assert!(config.use_mock);
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.locale, DEFAULT_LOCALE);
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meeple.toml");
        fs::write(
            &path,
            "use_mock = false\napi_base_url = \"http://localhost:3000/api\"\nlocale = \"en\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.use_mock);
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meeple.toml");
        fs::write(&path, "locale = \"en\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.use_mock);
        assert_eq!(config.locale, "en");
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Current-conditions endpoint of weatherapi.com.
pub const DEFAULT_ENDPOINT: &str = "https://api.weatherapi.com/v1/current.json";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// # endpoint = "https://api.weatherapi.com/v1/current.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Override for the provider endpoint; `None` means [`DEFAULT_ENDPOINT`].
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key to send, preferring `WEATHER_API_KEY` over the stored value.
    ///
    /// A missing key is not an error here: the provider rejects the request
    /// and that rejection reaches the user through the normal failure path.
    pub fn resolve_api_key(&self) -> String {
        self.api_key_with_override(env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_override(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_default()
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_key_and_default_endpoint() {
        let cfg = Config::default();

        assert_eq!(cfg.api_key_with_override(None), "");
        assert_eq!(cfg.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn env_key_overrides_stored_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.api_key_with_override(Some("ENV_KEY".into())), "ENV_KEY");
        assert_eq!(cfg.api_key_with_override(None), "FILE_KEY");
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.api_key_with_override(Some("   ".into())), "FILE_KEY");
    }

    #[test]
    fn parses_toml_with_endpoint_override() {
        let cfg = Config::from_toml(
            r#"
            api_key = "abc"
            endpoint = "http://127.0.0.1:8080/v1/current.json"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
        assert_eq!(cfg.endpoint(), "http://127.0.0.1:8080/v1/current.json");
    }

    #[test]
    fn toml_roundtrip_keeps_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
    }
}

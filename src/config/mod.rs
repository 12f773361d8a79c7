//! Configuration management
//!
//! Browser builds have no runtime environment, so overrides are baked in at
//! compile time through the `SPACEX_APP_CONFIG` environment variable (JSON).
//! Every field has a default; an unset variable yields the stock config.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Compile-time config override (JSON), captured by `build.rs` reruns
const CONFIG_ENV: Option<&str> = option_env!("SPACEX_APP_CONFIG");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Base URL of the SpaceX REST API (v3)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Prefix for durable browser preferences (`<namespace>_theme`)
    #[serde(default = "default_storage_namespace")]
    pub storage_namespace: String,

    /// Target of the "Source Code" link in the navigation
    #[serde(default = "default_source_url")]
    pub source_url: String,
}

fn default_api_base_url() -> String {
    "https://api.spacexdata.com/v3/".to_string()
}

fn default_storage_namespace() -> String {
    "space-x".to_string()
}

fn default_source_url() -> String {
    "https://github.com/httpJunkie/react-from-scratch".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            storage_namespace: default_storage_namespace(),
            source_url: default_source_url(),
        }
    }
}

impl AppConfig {
    /// Storage key holding the persisted theme mode
    pub fn theme_key(&self) -> String {
        format!("{}_theme", self.storage_namespace)
    }
}

/// Load configuration, applying the compile-time override if one was set
pub fn load_config() -> Result<AppConfig> {
    match CONFIG_ENV {
        Some(raw) if !raw.trim().is_empty() => {
            parse_config(raw).context("SPACEX_APP_CONFIG is not a valid app config")
        }
        _ => Ok(AppConfig::default()),
    }
}

/// Parse and validate a JSON config document
pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(raw).context("failed to parse config JSON")?;

    if config.storage_namespace.trim().is_empty() {
        bail!("storage_namespace must not be empty");
    }
    url::Url::parse(&config.api_base_url)
        .with_context(|| format!("api_base_url is not a URL: {}", config.api_base_url))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_key_matches_legacy_storage_key() {
        // Existing visitors already have their choice stored under this key
        assert_eq!(AppConfig::default().theme_key(), "space-x_theme");
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config = parse_config(r#"{"storage_namespace": "staging"}"#).expect("valid config");

        assert_eq!(config.theme_key(), "staging_theme");
        assert_eq!(config.api_base_url, "https://api.spacexdata.com/v3/");
        assert_eq!(config.source_url, default_source_url());
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let err = parse_config(r#"{"storage_namespace": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("storage_namespace"));
    }

    #[test]
    fn malformed_api_url_is_rejected() {
        assert!(parse_config(r#"{"api_base_url": "not a url"}"#).is_err());
    }

    #[test]
    fn unset_override_loads_defaults() {
        if CONFIG_ENV.is_none() {
            assert_eq!(load_config().expect("defaults load"), AppConfig::default());
        }
    }
}

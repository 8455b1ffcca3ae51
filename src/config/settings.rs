//! Configuration settings for the Opttab MCP client.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default service root of the Opttab AI model API.
pub const DEFAULT_BASE_URL: &str = "https://opttab.com/api/v1/ai";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// Demonstration walkthrough settings.
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from file, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_or_init(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        if config_path.exists() {
            return Self::load(Some(config_path));
        }

        let config = Self::default();
        config.save(Some(config_path.clone()))?;
        tracing::info!("Wrote default configuration to {}", config_path.display());
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Opttab API base URL.
    pub base_url: String,
    /// API key sent as `X-API-Key`.
    pub api_key: String,
    /// API secret sent as `X-API-Secret`.
    pub api_secret: String,
    /// Name of the AI model making requests.
    pub ai_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "opttab_ai_your_key".to_string(),
            api_secret: "your_secret_here".to_string(),
            ai_model: "OpenAI".to_string(),
        }
    }
}

/// Demonstration walkthrough settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// User whose opt-in status is checked.
    pub user_id: u64,
    /// Number of opted-in items to fetch.
    pub content_limit: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_id: 123,
            content_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.ai_model, "OpenAI");
        assert_eq!(config.demo.user_id, 123);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            api_key = "k"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.api_key, "k");
        assert_eq!(config.api.api_secret, "your_secret_here");
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.ai_model = "Claude".to_string();
        config.demo.user_id = 7;
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_or_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opttab").join("config.toml");

        let created = Config::load_or_init(Some(path.clone())).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let mut edited = created.clone();
        edited.api.api_key = "opttab_ai_real".to_string();
        edited.save(Some(path.clone())).unwrap();

        let reloaded = Config::load_or_init(Some(path)).unwrap();
        assert_eq!(reloaded, edited);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        let err = Config::load(Some(path)).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}

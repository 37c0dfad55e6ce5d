//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub x: XConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// RSS/Atom feed URLs to pull candidate articles from
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Hours between publish ticks
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XConfig {
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_api_secret_env")]
    pub api_secret_env: String,

    #[serde(default = "default_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "default_access_token_secret_env")]
    pub access_token_secret_env: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_interval_hours() -> u64 {
    4
}

fn default_api_key_env() -> String {
    "X_API_KEY".to_string()
}

fn default_api_secret_env() -> String {
    "X_API_SECRET_KEY".to_string()
}

fn default_access_token_env() -> String {
    "X_ACCESS_TOKEN".to_string()
}

fn default_access_token_secret_env() -> String {
    "X_ACCESS_TOKEN_SECRET".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_hours: default_interval_hours(),
        }
    }
}

impl Default for XConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            api_secret_env: default_api_secret_env(),
            access_token_env: default_access_token_env(),
            access_token_secret_env: default_access_token_secret_env(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("NEWS_HERALD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# news-herald configuration

[general]
log_level = "info"

[feeds]
# Feeds to pull candidate articles from; the first article of the combined
# list is posted on each tick.
urls = [
    "https://www.artificialintelligence-news.com/feed/",
    "https://feeds.feedburner.com/DataScienceCentral",
]

[schedule]
interval_hours = 4

[x]
# Environment variables holding the four required API secrets
api_key_env = "X_API_KEY"
api_secret_env = "X_API_SECRET_KEY"
access_token_env = "X_ACCESS_TOKEN"
access_token_secret_env = "X_ACCESS_TOKEN_SECRET"
"#
        .to_string()
    }
}

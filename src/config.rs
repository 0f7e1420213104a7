//! Configuration management
//!
//! Every field has a default, so running without a config file reproduces
//! the stock behavior. Layers, lowest to highest: defaults, TOML file,
//! `PREDICTOR_*` environment variables (`__` separates sections).

use crate::strategy::ScoringWeights;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub news: NewsConfig,
    pub market: MarketConfig,
    pub scoring: ScoringWeights,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// News search endpoint
    pub search_url: String,
    /// User-Agent sent with the search request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Yahoo Finance API base URL
    pub base_url: String,
    /// User-Agent sent with market-data requests
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the web page listens on
    pub bind: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            search_url: "https://www.google.com/search".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = ["predictor.toml", "~/.config/stock-predictor/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                tracing::debug!(path = %expanded, "loading configuration file");
                return Self::load(expanded.as_ref());
            }
        }

        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("PREDICTOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

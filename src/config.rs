//! Application configuration.
//!
//! Values come from an optional TOML file, then `PHOTOFEED_*` environment
//! variables (`__` separates sections, e.g. `PHOTOFEED_API__BASE_URL`).
//! Every setting has a default, so running without any configuration talks
//! to the public NASA image library.
//!
//! ```toml
//! [api]
//! base_url = "https://images-api.nasa.gov"
//! search_terms = ["space", "apollo", "mars"]
//!
//! [logging]
//! level = "debug"
//! dir = "logs"
//!
//! [ui]
//! tick_ms = 100
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use config::{Environment, File, FileFormat};
use serde::Deserialize;

use crate::source::DEFAULT_SEARCH_TERMS;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "photofeed.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Rotated through, one per page.  Must not be empty.
    #[serde(default = "default_search_terms")]
    pub search_terms: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_terms: default_search_terms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default filter; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Redraw / input poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_base_url() -> String {
    "https://images-api.nasa.gov".to_string()
}

fn default_search_terms() -> Vec<String> {
    DEFAULT_SEARCH_TERMS.iter().map(|t| t.to_string()).collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist.  Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config: Config = config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("PHOTOFEED")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("api.search_terms")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.api.search_terms.is_empty(),
            "api.search_terms must contain at least one term"
        );
        if let Some(index) = self.api.search_terms.iter().position(|t| t.trim().is_empty()) {
            bail!("api.search_terms[{index}] is blank");
        }
        ensure!(self.ui.tick_ms > 0, "ui.tick_ms must be positive");
        Ok(())
    }

    #[cfg(test)]
    fn from_toml(text: &str) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

//! Configuration management for Panther docs.
//!
//! Parses `panther.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "panther.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation configuration.
    pub site: SiteSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title, used verbatim for the root page.
    pub title: String,
    /// Page title template; `%s` is replaced by the page label.
    pub title_template: String,
    /// Public base URL of the deployed site.
    pub base_url: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Panther docs".to_owned(),
            title_template: "%s | Panther docs".to_owned(),
            base_url: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `panther.toml` in the current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let start = std::env::current_dir().unwrap_or_default();
        match Self::discover_config(&start) {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when a field is empty or malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.title_template, "site.title_template")?;
        if !self.site.title_template.contains("%s") {
            return Err(ConfigError::Validation(
                "site.title_template must contain '%s'".to_owned(),
            ));
        }
        if let Some(base_url) = &self.site.base_url {
            require_http_url(base_url, "site.base_url")?;
        }
        Ok(())
    }
}

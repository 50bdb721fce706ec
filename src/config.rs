//! Configuration management for the sitemap tooling
//!
//! Handles loading configuration from a TOML file and environment
//! variables, and provides validation for all configuration settings.

use crate::SitemapError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the sitemap tooling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Site identity and output settings
    #[serde(default)]
    pub site: SiteConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site identity and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base domain used to build absolute URLs; no trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory the sitemap and robots files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the in-app sitemap endpoints are served on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://trivenicabs.in".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SitemapConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides, e.g. TRIVENI_SITE__BASE_URL
        builder = builder.add_source(
            Environment::with_prefix("TRIVENI")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SitemapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.site.base_url.is_empty() {
            self.site.base_url = default_base_url();
        }
        if self.site.output_dir.is_empty() {
            self.site.output_dir = default_output_dir();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if !self.site.base_url.starts_with("http://")
            && !self.site.base_url.starts_with("https://")
        {
            return Err(
                SitemapError::config("Base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        if self.site.base_url.ends_with('/') {
            return Err(SitemapError::config(
                "Base URL must not end with a slash; generated paths already begin with one",
            )
            .into());
        }

        if self.site.output_dir.is_empty() {
            return Err(SitemapError::config("Output directory cannot be empty").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SitemapError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SitemapError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SitemapConfig::default();
        assert_eq!(config.site.base_url, "https://trivenicabs.in");
        assert_eq!(config.site.output_dir, "public");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SitemapConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_trailing_slash() {
        let mut config = SitemapConfig::default();
        config.site.base_url = "https://example.com/".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("must not end with a slash")
        );
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = SitemapConfig::default();
        config.site.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = SitemapConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = SitemapConfig::default();
        config.site.base_url = String::new();
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.site.base_url, "https://trivenicabs.in");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let config = SitemapConfig::load_from_path(Some(PathBuf::from(
            "definitely-not-a-real-config.toml",
        )))
        .expect("load failed");
        assert_eq!(config.site.output_dir, "public");
    }
}

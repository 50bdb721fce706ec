//! Error types and handling for the sitemap tooling

use thiserror::Error;

/// Main error type for the sitemap tooling
#[derive(Error, Debug)]
pub enum SitemapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl SitemapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SitemapError::Config { .. } => {
                "Configuration error. Please check your config file and overrides.".to_string()
            }
            SitemapError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SitemapError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            SitemapError::General { message } => message.clone(),
        }
    }
}

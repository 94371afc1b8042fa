//! # Error Handling
//!
//! This module defines the centralized error type for `jenkins-freestyle`.
//! It uses the `thiserror` library to create an `Error` enum covering every
//! failure the library can report, with descriptive messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The only failure that originates inside the
//!   job document builder itself is [`Error::Validation`]; the remaining
//!   variants come from loading parameter files and encoding the finished
//!   document.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Malformed input other than an SCM provider without a URL is absorbed into
//! default behavior and never surfaces as an error.

use thiserror::Error;

/// Message carried by [`Error::Validation`] when an SCM provider has no URL.
pub const SCM_URL_REQUIRED: &str = "SCM provider URL must be specified";

/// Main error type for jenkins-freestyle operations
#[derive(Error, Debug)]
pub enum Error {
    /// The job parameters are inconsistent and no document can be built.
    ///
    /// Raised exactly when an SCM provider is named without a URL.
    #[error("{message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Validation {
        message: String,
        /// Optional hint for how to fix the parameters
        hint: Option<String>,
    },

    /// A parameter file could not be interpreted as a job parameter mapping.
    #[error("Configuration parsing error: {message}")]
    ConfigParse { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document tree could not be encoded as XML.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// The validation failure for an SCM provider given without a URL.
    pub fn scm_url_required(provider: &str) -> Self {
        Error::Validation {
            message: SCM_URL_REQUIRED.to_string(),
            hint: Some(format!(
                "set 'scm_url' for scm_provider '{}', or remove 'scm_provider'",
                provider
            )),
        }
    }

    /// Returns `true` if this is a parameter validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

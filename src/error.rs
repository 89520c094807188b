//! Error types for the plangate tool.
//!
//! This module provides the error hierarchy for the two failure domains of
//! the gate: configuration (environment, run URL) and the Terraform Cloud
//! API (transport, status, response shape). Components never terminate the
//! process; every failure propagates here and the binary decides the exit
//! code.

use thiserror::Error;

/// The main error type for plangate.
#[derive(Debug, Error)]
pub enum PlangateError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terraform Cloud API errors.
    #[error("Terraform Cloud API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors (summary artifacts).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is missing.
    #[error("Missing environment variable: {name}")]
    MissingEnvVar {
        /// Name of the missing variable.
        name: String,
    },

    /// No run id could be extracted from the run URL.
    #[error("No run id found in URL: {url}")]
    InvalidRunUrl {
        /// The URL that did not contain a run id.
        url: String,
    },
}

/// Terraform Cloud API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error talking to Terraform Cloud.
    #[error("Network error communicating with Terraform Cloud: {message}")]
    NetworkError {
        /// Description of the network error.
        message: String,
    },

    /// API request returned a non-success status.
    #[error("Terraform Cloud API request failed: {status} - {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response body from the API.
        body: String,
    },

    /// The apply trigger was not accepted.
    #[error("Apply was not accepted: {status} - {body}")]
    ApplyRejected {
        /// HTTP status code.
        status: u16,
        /// Response body from the API.
        body: String,
    },

    /// Invalid or incomplete response from the API.
    #[error("Invalid response from Terraform Cloud API: {message}")]
    InvalidResponse {
        /// Description of the response issue.
        message: String,
    },
}

/// Result type alias for plangate operations.
pub type Result<T> = std::result::Result<T, PlangateError>;

impl PlangateError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl ConfigError {
    /// Creates a missing-environment-variable error.
    #[must_use]
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnvVar { name: name.into() }
    }

    /// Creates an invalid-run-URL error.
    #[must_use]
    pub fn invalid_run_url(url: impl Into<String>) -> Self {
        Self::InvalidRunUrl { url: url.into() }
    }
}

impl ApiError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates a request-failed error from a status and body.
    #[must_use]
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Creates an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

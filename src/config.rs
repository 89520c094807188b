//! Gate configuration loaded from the process environment.
//!
//! Credentials and the run URL arrive via environment variables (with an
//! optional `.env` file honored through dotenvy). The configuration is built
//! once at startup into an explicit struct and passed by reference into the
//! API client; nothing reads the environment after this point.

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable holding the Terraform Cloud API token.
pub const TOKEN_VAR: &str = "TFC_TOKEN";

/// Environment variable holding the run URL to gate.
pub const RUN_URL_VAR: &str = "RUN_URL";

/// Optional environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "TFC_API_URL";

/// Default Terraform Cloud API base URL.
pub const DEFAULT_API_BASE: &str = "https://app.terraform.io/api/v2";

/// Configuration for one gate invocation.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Bearer token for the Terraform Cloud API.
    pub token: String,
    /// URL of the run to inspect and (conditionally) apply.
    pub run_url: String,
    /// Base URL of the Terraform Cloud API.
    pub api_base: String,
}

impl GateConfig {
    /// Creates a configuration with the default API base URL.
    #[must_use]
    pub fn new(token: impl Into<String>, run_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            run_url: run_url.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the current directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `TFC_TOKEN` or `RUN_URL` is not set.
    pub fn from_env() -> Result<Self> {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded environment from .env");
        }

        let token = required_env(TOKEN_VAR)?;
        let run_url = required_env(RUN_URL_VAR)?;

        let mut config = Self::new(token, run_url);
        if let Ok(api_base) = std::env::var(API_URL_VAR) {
            debug!("Overriding API base URL from environment");
            config = config.with_api_base(api_base);
        }

        Ok(config)
    }
}

/// Reads a required environment variable.
fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| ConfigError::missing_env(name).into())
        .and_then(|value| {
            if value.is_empty() {
                Err(ConfigError::missing_env(name).into())
            } else {
                Ok(value)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let config = GateConfig::new("tok", "https://app.terraform.io/app/org/ws/runs/run-abc");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_api_base_override() {
        let config = GateConfig::new("tok", "url").with_api_base("http://localhost:8080/api/v2");
        assert_eq!(config.api_base, "http://localhost:8080/api/v2");
        assert_eq!(config.token, "tok");
        assert_eq!(config.run_url, "url");
    }

    #[test]
    fn test_required_env_missing() {
        let result = required_env("PLANGATE_TEST_DOES_NOT_EXIST");
        assert!(result.is_err());
    }
}

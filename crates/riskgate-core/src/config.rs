//! Configuration management for the riskgate system.

use std::env;
use std::time::Duration;

/// Risk oracle connection settings.
#[derive(Clone)]
pub struct OracleConfig {
    /// Base URL of the risk oracle service.
    pub base_url: String,
    /// Bearer credential. `None` is rejected at client construction.
    pub api_key: Option<String>,
    /// Upper bound on each context request.
    pub timeout: Duration,
}

impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OracleConfig {
    /// Default risk oracle endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.risk-oracle.io";
    /// Default per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

    /// Load settings from environment variables (reading `.env` first).
    ///
    /// `RISK_ORACLE_URL` and `RISK_ORACLE_TIMEOUT_SECS` fall back to
    /// defaults when unset; `RISK_ORACLE_API_KEY` stays `None`, which the
    /// client rejects at construction.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("RISK_ORACLE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            api_key: env::var("RISK_ORACLE_API_KEY").ok(),
            timeout: Duration::from_secs(
                env::var("RISK_ORACLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(Self::DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// Set an explicit credential, overriding any environment-sourced one.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Settings for tests: local endpoint, dummy key, short timeout.
    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test-key".to_string()),
            timeout: Duration::from_millis(250),
        }
    }
}

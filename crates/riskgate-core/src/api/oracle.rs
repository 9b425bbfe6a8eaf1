//! Risk oracle API client.
//!
//! Fetches point-in-time risk contexts for instruments. Each call is a
//! single GET with a hard timeout and no retry; how to degrade on failure
//! is the caller's decision (the gating engine fails open).

use crate::config::OracleConfig;
use crate::types::RiskContext;
use crate::{Error, Result};
use tracing::debug;

/// HTTP client for the risk oracle service.
pub struct OracleClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OracleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OracleClient {
    /// Create a client from explicit settings.
    ///
    /// Fails with `Error::Config` when the settings carry no credential.
    /// This is the only construction-time failure and happens before any
    /// network activity.
    pub fn new(config: OracleConfig) -> Result<Self> {
        let api_key = match config.api_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(Error::Config {
                    message: "Risk oracle API key missing. \
                              Pass one explicitly or set RISK_ORACLE_API_KEY."
                        .to_string(),
                })
            }
        };

        let http_client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url,
            api_key,
            http_client,
        })
    }

    /// Create a client with an explicit API key; other settings come from
    /// the environment. The explicit key wins over `RISK_ORACLE_API_KEY`.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(OracleConfig::from_env().with_api_key(api_key))
    }

    /// Create a client entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(OracleConfig::from_env())
    }

    /// Fetch the current risk context for an instrument.
    ///
    /// Exactly one GET per call. A non-2xx status maps to `Error::Api`
    /// with the status and body text; network failures and timeouts map
    /// to `Error::Http`; an unparsable body maps to `Error::Json`. All
    /// three are transport-class for the caller.
    pub async fn fetch_context(&self, instrument: &str) -> Result<RiskContext> {
        let url = format!("{}/context", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("instrument", instrument)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: format!("Risk oracle returned {}: {}", status, body),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        let context: RiskContext = serde_json::from_str(&body)?;
        debug!(
            instrument,
            safe_to_trade = context.safe_to_trade,
            risk_score = context.risk_score,
            "Fetched risk context"
        );

        Ok(context)
    }
}

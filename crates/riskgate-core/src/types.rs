//! Core types shared across the riskgate system.

use serde::{Deserialize, Serialize};

/// Point-in-time risk signal for a single instrument.
///
/// Produced fresh by the oracle on every query and never cached or
/// mutated. Only `safe_to_trade` and `risk_score` are required on the
/// wire; everything else the oracle sends lands in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskContext {
    /// Top-level gate signal from the oracle.
    pub safe_to_trade: bool,
    /// Continuous risk magnitude in `[0.0, 1.0]`, 0 = safest.
    pub risk_score: f64,
    /// Ordered human-readable justification; may be empty.
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Oracle-specific extra fields (regime labels, volatility figures,
    /// risk classes), passed through without interpretation.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RiskContext {
    /// The fail-open substitute: the most permissive context, used
    /// whenever a live context cannot be obtained.
    pub fn permissive() -> Self {
        Self {
            safe_to_trade: true,
            risk_score: 0.0,
            reasoning: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Risk score normalized into `[0.0, 1.0]`.
    ///
    /// Out-of-range values clamp; non-finite values normalize to 0.0,
    /// the permissive end. Decision code must read the score through
    /// this method, never the raw field.
    pub fn clamped_score(&self) -> f64 {
        if self.risk_score.is_finite() {
            self.risk_score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

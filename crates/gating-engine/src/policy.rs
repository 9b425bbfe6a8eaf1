//! Pure gating policy over risk contexts.
//!
//! All methods are deterministic functions of the context: no I/O, no
//! clock, no shared state. Scores are read through
//! [`RiskContext::clamped_score`] so malformed oracle values cannot
//! produce undefined decisions.

use riskgate_core::types::RiskContext;
use serde::{Deserialize, Serialize};

/// Entry/sizing decision derived from one risk context.
///
/// Ephemeral: always recomputed from a context, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GatingDecision {
    /// Whether a new entry may proceed.
    pub allow_entry: bool,
    /// Stake multiplier in `[0.0, 1.0]` for sizing the entry.
    pub size_multiplier: f64,
}

/// Configuration and evaluation of the risk gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Risk score at which entries are blocked (inclusive).
    pub risk_threshold: f64,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            risk_threshold: Self::DEFAULT_RISK_THRESHOLD,
        }
    }
}

impl GatePolicy {
    /// Default entry-block threshold.
    pub const DEFAULT_RISK_THRESHOLD: f64 = 0.4;

    /// Floor of the continuous stake curve.
    pub const STAKE_FLOOR: f64 = 0.3;
    /// Slope of the continuous stake curve.
    const STAKE_SLOPE: f64 = 0.7;

    /// Score above which an open position is closed outright.
    pub const ADJUST_CLOSE_ABOVE: f64 = 0.7;
    /// Score above which an open position is halved.
    pub const ADJUST_HALVE_ABOVE: f64 = 0.4;

    /// Policy with a custom entry threshold.
    pub fn new(risk_threshold: f64) -> Self {
        Self { risk_threshold }
    }

    /// Whether a new entry may proceed under this context.
    ///
    /// Blocked when the oracle flags the instrument unsafe, or when the
    /// clamped score reaches the threshold. A score exactly equal to the
    /// threshold blocks.
    pub fn should_enter(&self, context: &RiskContext) -> bool {
        if !context.safe_to_trade {
            return false;
        }

        context.clamped_score() < self.risk_threshold
    }

    /// Discrete multiplier for adjusting an already-open position.
    ///
    /// `r > 0.7` closes (0.0), `0.4 < r <= 0.7` halves (0.5), `r <= 0.4`
    /// holds (1.0). Applies to open positions only; new entries are sized
    /// with the continuous curve.
    pub fn position_adjustment(&self, context: &RiskContext) -> f64 {
        let r = context.clamped_score();
        if r > Self::ADJUST_CLOSE_ABOVE {
            0.0
        } else if r > Self::ADJUST_HALVE_ABOVE {
            0.5
        } else {
            1.0
        }
    }

    /// Continuous multiplier for sizing a new entry.
    ///
    /// Linear from 1.0 at `r = 0` down to the 0.3 floor at `r >= 1.0`.
    /// An allowed entry is never sized below the floor.
    pub fn stake_multiplier(&self, context: &RiskContext) -> f64 {
        let r = context.clamped_score();
        (1.0 - Self::STAKE_SLOPE * r).max(Self::STAKE_FLOOR)
    }

    /// Full decision for one context: entry gate plus stake sizing.
    pub fn decide(&self, context: &RiskContext) -> GatingDecision {
        GatingDecision {
            allow_entry: self.should_enter(context),
            size_multiplier: self.stake_multiplier(context),
        }
    }
}

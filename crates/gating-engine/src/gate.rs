//! Fail-open trade gate over a risk-context source.
//!
//! The gate sits between host-strategy callbacks and the risk oracle. A
//! risk filter must never halt the host strategy, so every fetch failure
//! degrades to the permissive context and is visible only in the logs.

use std::sync::Arc;

use dashmap::DashMap;
use riskgate_core::api::OracleClient;
use riskgate_core::types::RiskContext;
use riskgate_core::Result;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::policy::{GatePolicy, GatingDecision};

/// Source of risk contexts.
///
/// Implemented by [`OracleClient`] for production and by in-memory
/// sources for tests and dry runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContextSource: Send + Sync {
    /// Fetch the current risk context for an instrument.
    async fn risk_context(&self, instrument: &str) -> Result<RiskContext>;
}

#[async_trait::async_trait]
impl ContextSource for OracleClient {
    async fn risk_context(&self, instrument: &str) -> Result<RiskContext> {
        self.fetch_context(instrument).await
    }
}

/// Fixed-context source for tests and dry runs.
pub struct StaticContextSource {
    context: RiskContext,
}

impl StaticContextSource {
    pub fn new(context: RiskContext) -> Self {
        Self { context }
    }
}

#[async_trait::async_trait]
impl ContextSource for StaticContextSource {
    async fn risk_context(&self, _instrument: &str) -> Result<RiskContext> {
        Ok(self.context.clone())
    }
}

/// Risk gate wrapping a context source with fail-open semantics.
///
/// The latest decision per instrument is kept so host callbacks can
/// re-read it within the same evaluation tick without another fetch.
pub struct TradeGate {
    source: Arc<dyn ContextSource>,
    policy: GatePolicy,
    last_decisions: DashMap<String, GatingDecision>,
}

impl TradeGate {
    /// Create a gate with the default policy.
    pub fn new(source: Arc<dyn ContextSource>) -> Self {
        Self::with_policy(source, GatePolicy::default())
    }

    /// Create a gate with a custom policy.
    pub fn with_policy(source: Arc<dyn ContextSource>, policy: GatePolicy) -> Self {
        Self {
            source,
            policy,
            last_decisions: DashMap::new(),
        }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Fetch a context and derive the gating decision for an instrument.
    ///
    /// Never fails: any transport error substitutes the permissive
    /// context. The decision replaces the instrument's cached one.
    pub async fn evaluate(&self, instrument: &str) -> GatingDecision {
        let context = self.fetch_or_permissive(instrument).await;

        let decision = self.policy.decide(&context);
        if !decision.allow_entry {
            info!(
                instrument,
                risk_score = context.clamped_score(),
                reasoning = ?context.reasoning,
                "Entry blocked by risk gate"
            );
        }

        self.last_decisions.insert(instrument.to_string(), decision);
        decision
    }

    /// Entry hook for the host strategy: allow or deny one entry.
    pub async fn confirm_entry(&self, instrument: &str) -> bool {
        self.evaluate(instrument).await.allow_entry
    }

    /// Adjustment hook: discrete multiplier for an already-open position.
    pub async fn position_adjustment(&self, instrument: &str) -> f64 {
        let context = self.fetch_or_permissive(instrument).await;
        self.policy.position_adjustment(&context)
    }

    /// Sizing hook: scale a proposed stake by the continuous multiplier
    /// and clamp into the host's allowed band. Falls back to the proposed
    /// stake when the multiplier cannot be represented as a `Decimal`.
    pub async fn scale_stake(
        &self,
        instrument: &str,
        proposed_stake: Decimal,
        min_stake: Decimal,
        max_stake: Decimal,
    ) -> Decimal {
        let decision = self.evaluate(instrument).await;

        match Decimal::from_f64_retain(decision.size_multiplier) {
            Some(multiplier) => (proposed_stake * multiplier).clamp(min_stake, max_stake),
            None => proposed_stake,
        }
    }

    /// Latest decision computed for an instrument, if any.
    pub fn last_decision(&self, instrument: &str) -> Option<GatingDecision> {
        self.last_decisions.get(instrument).map(|d| *d)
    }

    async fn fetch_or_permissive(&self, instrument: &str) -> RiskContext {
        match self.source.risk_context(instrument).await {
            Ok(context) => context,
            Err(e) => {
                warn!(
                    instrument,
                    error = %e,
                    "Risk context fetch failed, failing open"
                );
                RiskContext::permissive()
            }
        }
    }
}

//! Gating Engine
//!
//! Risk-gated trade entry and position sizing: a pure decision policy
//! over risk contexts, plus a fail-open gate that wraps the risk-oracle
//! client for use from host-strategy callbacks.

pub mod gate;
pub mod policy;

pub use gate::{ContextSource, StaticContextSource, TradeGate};
pub use policy::{GatePolicy, GatingDecision};

//! Riskgate: Risk-Gated Trade Entry and Backtest Comparison
//!
//! This is the root crate that provides benchmark access to the internal modules.
//! For actual functionality, use the individual crates directly:
//!
//! - `riskgate-core`: Core types, configuration, risk-oracle API client
//! - `gating-engine`: Entry gating, position sizing, fail-open policy
//! - `backtest-compare`: Backtest summary comparison and reporting

// Re-export for benchmarks
pub use backtest_compare as compare;
pub use gating_engine as gating;
pub use riskgate_core as core;

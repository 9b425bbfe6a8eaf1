//! Backtest Compare
//!
//! Loads two externally-produced performance summaries (one trading run
//! with risk gating enabled, one without) and quantifies the effect of
//! gating: per-metric deltas plus four qualitative insights.

pub mod compare;
pub mod report;
pub mod summary;

pub use compare::{compare, ComparisonResult, Insight, Insights, MetricDelta};
pub use report::render_report;
pub use summary::{load_summary, InputError, PerformanceSummary};

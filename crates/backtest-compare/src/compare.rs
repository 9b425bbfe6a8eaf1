//! Pure comparison of two performance summaries.

use serde::Serialize;

use crate::summary::PerformanceSummary;

/// Signed change for one metric between the gated and baseline runs.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDelta {
    /// Metric field name.
    pub metric: &'static str,
    pub with_gating: f64,
    pub without_gating: f64,
    /// `with_gating - without_gating`.
    pub delta: f64,
    /// Percent change against the baseline; 0.0 when the baseline is zero.
    pub delta_pct: f64,
}

/// One derived insight: a signed value plus its reading.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Insight {
    pub value: f64,
    /// Whether the value reads as an improvement under gating.
    pub improved: bool,
}

impl Insight {
    fn from_value(value: f64) -> Self {
        Self {
            value,
            improved: value > 0.0,
        }
    }
}

/// The four qualitative insights. Sign conventions are fixed so that
/// positive always means gating did better on that axis.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    /// Percent fewer trades under gating.
    pub trade_reduction_pct: Insight,
    /// Win-rate delta, gated minus baseline.
    pub win_rate_delta: Insight,
    /// Total-profit-percent delta, gated minus baseline.
    pub profit_delta: Insight,
    /// Drawdown improvement, baseline minus gated (lower drawdown is
    /// better, so the subtraction is reversed).
    pub drawdown_improvement: Insight,
}

/// Structured diff of two performance summaries.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub deltas: Vec<MetricDelta>,
    pub insights: Insights,
}

/// Compare a gated run against its ungated baseline.
///
/// Pure and total: no I/O, deterministic, and never fails on finite
/// inputs. Percent changes against a zero baseline fall back to 0.0.
pub fn compare(
    with_gating: &PerformanceSummary,
    without_gating: &PerformanceSummary,
) -> ComparisonResult {
    let deltas = vec![
        metric_delta(
            "total_trades",
            with_gating.total_trades as f64,
            without_gating.total_trades as f64,
        ),
        metric_delta(
            "winning_trades",
            with_gating.winning_trades as f64,
            without_gating.winning_trades as f64,
        ),
        metric_delta(
            "losing_trades",
            with_gating.losing_trades as f64,
            without_gating.losing_trades as f64,
        ),
        metric_delta("win_rate", with_gating.win_rate, without_gating.win_rate),
        metric_delta(
            "profit_total",
            with_gating.profit_total,
            without_gating.profit_total,
        ),
        metric_delta(
            "profit_total_pct",
            with_gating.profit_total_pct,
            without_gating.profit_total_pct,
        ),
        metric_delta(
            "max_drawdown",
            with_gating.max_drawdown,
            without_gating.max_drawdown,
        ),
        metric_delta(
            "max_drawdown_abs",
            with_gating.max_drawdown_abs,
            without_gating.max_drawdown_abs,
        ),
        metric_delta(
            "sharpe_ratio",
            with_gating.sharpe_ratio,
            without_gating.sharpe_ratio,
        ),
    ];

    let trade_reduction_pct = if without_gating.total_trades > 0 {
        (without_gating.total_trades as f64 - with_gating.total_trades as f64)
            / without_gating.total_trades as f64
            * 100.0
    } else {
        0.0
    };

    let insights = Insights {
        trade_reduction_pct: Insight::from_value(trade_reduction_pct),
        win_rate_delta: Insight::from_value(with_gating.win_rate - without_gating.win_rate),
        profit_delta: Insight::from_value(
            with_gating.profit_total_pct - without_gating.profit_total_pct,
        ),
        drawdown_improvement: Insight::from_value(
            without_gating.max_drawdown - with_gating.max_drawdown,
        ),
    };

    ComparisonResult { deltas, insights }
}

fn metric_delta(metric: &'static str, with_gating: f64, without_gating: f64) -> MetricDelta {
    let delta = with_gating - without_gating;
    let delta_pct = if without_gating != 0.0 {
        delta / without_gating * 100.0
    } else {
        0.0
    };

    MetricDelta {
        metric,
        with_gating,
        without_gating,
        delta,
        delta_pct,
    }
}

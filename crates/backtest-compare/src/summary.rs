//! Performance-summary input: schema and file loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Aggregate outcome of one completed trading run, externally produced.
///
/// Absent numeric fields default to zero and unknown fields are ignored,
/// so summaries from different backtest exporters load without schema
/// negotiation. The `winning + losing <= total` relation is trusted
/// input, not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSummary {
    /// Total trades executed.
    pub total_trades: u64,
    /// Winning trades.
    #[serde(alias = "wins")]
    pub winning_trades: u64,
    /// Losing trades.
    #[serde(alias = "losses")]
    pub losing_trades: u64,
    /// Win rate as a fraction.
    #[serde(alias = "winrate")]
    pub win_rate: f64,
    /// Total profit (absolute).
    pub profit_total: f64,
    /// Total profit as a fraction of starting capital.
    pub profit_total_pct: f64,
    /// Maximum drawdown as a fraction.
    pub max_drawdown: f64,
    /// Maximum drawdown (absolute).
    pub max_drawdown_abs: f64,
    /// Sharpe ratio (annualized).
    pub sharpe_ratio: f64,
}

/// Failure to read or parse a summary file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a performance summary from a JSON file.
pub fn load_summary(path: impl AsRef<Path>) -> Result<PerformanceSummary, InputError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

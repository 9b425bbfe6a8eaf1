//! Backtest Compare CLI
//!
//! Compares two externally-produced backtest summaries (gated vs ungated)
//! and prints a per-metric report.

use anyhow::Result;
use backtest_compare::{compare, load_summary, render_report};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backtest_compare=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <with_gating.json> <without_gating.json>", args[0]);
        std::process::exit(1);
    }

    let with_gating = load_summary(&args[1])?;
    let without_gating = load_summary(&args[2])?;
    info!(
        with_gating = %args[1],
        without_gating = %args[2],
        "Loaded backtest summaries"
    );

    let result = compare(&with_gating, &without_gating);
    print!("{}", render_report(&result));

    Ok(())
}

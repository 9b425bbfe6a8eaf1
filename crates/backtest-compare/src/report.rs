//! Human-readable rendering of a comparison.

use crate::compare::{ComparisonResult, Insight};

/// Render the comparison as a fixed-width table plus a key-insights
/// block. Formatting is presentational only; the numbers come straight
/// from [`ComparisonResult`].
pub fn render_report(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<18} {:>14} {:>14} {:>14} {:>10}\n",
        "Metric", "With gating", "Without", "Change", "Change %"
    ));
    out.push_str(&format!("{}\n", "-".repeat(74)));

    for row in &result.deltas {
        out.push_str(&format!(
            "{:<18} {:>14.4} {:>14.4} {:>+14.4} {:>+9.1}%\n",
            row.metric, row.with_gating, row.without_gating, row.delta, row.delta_pct
        ));
    }

    let insights = &result.insights;
    out.push_str("\nKey insights\n");
    out.push_str(&insight_line(
        "Trade reduction",
        &insights.trade_reduction_pct,
        "%",
    ));
    out.push_str(&insight_line("Win rate change", &insights.win_rate_delta, ""));
    out.push_str(&insight_line("Profit change", &insights.profit_delta, ""));
    out.push_str(&insight_line(
        "Drawdown improvement",
        &insights.drawdown_improvement,
        "",
    ));

    out
}

fn insight_line(label: &str, insight: &Insight, unit: &str) -> String {
    let reading = if insight.improved {
        "improved"
    } else {
        "not improved"
    };
    format!(
        "  {:<22} {:>+10.4}{} ({})\n",
        label, insight.value, unit, reading
    )
}

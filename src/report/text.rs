use std::collections::BTreeMap;

use crate::report::{RankedFund, SummaryData, format_f64_6};

pub fn render_report_text(
    summary: &SummaryData,
    ranked: &BTreeMap<&str, Vec<RankedFund<'_>>>,
    top_n: usize,
) -> String {
    let mut out = String::new();

    out.push_str("Mutual Fund Category Ranking\n");
    out.push_str("============================\n\n");

    out.push_str(&format!("Input: {}\n", summary.input.path));
    out.push_str(&format!(
        "Minimum fund size (INR millions): {}\n",
        summary.input.min_nav_millions
    ));
    out.push_str(&format!(
        "Missing metric policy: {}\n",
        summary.input.missing_metric_policy
    ));
    out.push_str(&format!(
        "Rows loaded: {}, kept: {}, scored: {}\n",
        summary.rows.loaded, summary.rows.kept, summary.rows.scored
    ));
    let d = &summary.rows.dropped;
    out.push_str(&format!(
        "Dropped: missing category {}, below minimum size {}, missing 5y return {}, missing 3y sharpe {}\n",
        d.missing_category, d.below_min_nav, d.missing_five_year_return, d.missing_three_year_sharpe
    ));
    if !summary.rows.unmapped_labels.is_empty() {
        out.push_str(&format!(
            "Unmapped category labels: {}\n",
            summary.rows.unmapped_labels.join(", ")
        ));
    }
    out.push_str(&format!("Categories: {}\n\n", summary.n_categories));
    out.push_str("Scores compare funds within their own category only.\n\n");

    for (category, funds) in ranked {
        out.push_str(&format!("{} ({} funds)\n", category, funds.len()));
        for entry in funds.iter().take(top_n) {
            out.push_str(&format!(
                "  {:>3}. {}  total={}  return={}  risk={}\n",
                entry.rank,
                entry.fund.record.legal_name,
                format_f64_6(entry.fund.total_score),
                format_f64_6(entry.fund.return_score),
                format_f64_6(entry.fund.risk_score)
            ));
        }
        if funds.len() > top_n {
            out.push_str(&format!("  ... {} more\n", funds.len() - top_n));
        }
        out.push('\n');
    }

    out
}

use std::collections::BTreeMap;

use crate::report::{RankedFund, ReportError, SummaryData};

pub fn render_summary_json(data: &SummaryData) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

/// Flat array in the same order as ranking.tsv.
pub fn render_ranking_json(
    ranked: &BTreeMap<&str, Vec<RankedFund<'_>>>,
) -> Result<String, ReportError> {
    let rows: Vec<&RankedFund<'_>> = ranked.values().flatten().collect();
    let mut out = serde_json::to_string_pretty(&rows)?;
    out.push('\n');
    Ok(out)
}

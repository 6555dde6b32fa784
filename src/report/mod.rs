pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::ScoredFundRecord;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub min_nav_millions: f64,
    pub missing_metric_policy: String,
    pub category_overrides: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DroppedRows {
    pub missing_category: usize,
    pub below_min_nav: usize,
    pub missing_five_year_return: usize,
    pub missing_three_year_sharpe: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowSummary {
    pub loaded: usize,
    pub kept: usize,
    pub scored: usize,
    pub dropped: DroppedRows,
    pub relabeled: usize,
    pub unmapped_labels: Vec<String>,
    pub substituted_metrics: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub n_funds: usize,
    pub median_total_score: f64,
    pub p90_total_score: f64,
    pub max_total_score: f64,
    pub top_fund: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub rows: RowSummary,
    pub n_categories: usize,
    pub categories: Vec<CategorySummary>,
}

/// A scored fund with its 1-based competition rank inside its category:
/// equal totals share a rank and the next distinct total skips ahead.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedFund<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub fund: &'a ScoredFundRecord,
}

/// Categories ascending; within a category by total score descending, then
/// by input row.
pub fn rank_within_categories(
    scored: &[ScoredFundRecord],
) -> BTreeMap<&str, Vec<RankedFund<'_>>> {
    let mut by_category: BTreeMap<&str, Vec<&ScoredFundRecord>> = BTreeMap::new();
    for fund in scored {
        by_category.entry(fund.category()).or_default().push(fund);
    }

    let mut out = BTreeMap::new();
    for (category, mut funds) in by_category {
        funds.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then(a.record.row.cmp(&b.record.row))
        });
        let mut ranked: Vec<RankedFund<'_>> = Vec::with_capacity(funds.len());
        for (idx, fund) in funds.into_iter().enumerate() {
            let rank = match ranked.last() {
                Some(prev) if prev.fund.total_score == fund.total_score => prev.rank,
                _ => idx + 1,
            };
            ranked.push(RankedFund { rank, fund });
        }
        out.insert(category, ranked);
    }
    out
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_opt(v: Option<f64>) -> String {
    v.map(format_f64_6).unwrap_or_default()
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

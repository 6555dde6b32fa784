use std::collections::BTreeSet;

use crate::categories::CategoryMap;
use crate::input::RawFundRow;
use crate::model::FundRecord;

#[derive(Debug, Clone)]
pub struct CleanParams {
    pub min_nav_millions: f64,
}

impl Default for CleanParams {
    fn default() -> Self {
        Self {
            min_nav_millions: 1000.0,
        }
    }
}

/// Row accounting for the cleaning stage. Each dropped row is counted once,
/// under the first check it fails in the order category, fund size,
/// five-year return, three-year sharpe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanAudit {
    pub loaded: usize,
    pub kept: usize,
    pub missing_category: usize,
    pub below_min_nav: usize,
    pub missing_five_year_return: usize,
    pub missing_three_year_sharpe: usize,
    pub relabeled: usize,
    pub unmapped_labels: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub records: Vec<FundRecord>,
    pub audit: CleanAudit,
}

enum DropReason {
    MissingCategory,
    BelowMinNav,
    MissingFiveYearReturn,
    MissingThreeYearSharpe,
}

pub fn run_stage1(
    rows: &[RawFundRow],
    params: &CleanParams,
    labels: &CategoryMap,
) -> Stage1Output {
    let mut audit = CleanAudit {
        loaded: rows.len(),
        ..CleanAudit::default()
    };
    let mut records = Vec::with_capacity(rows.len());

    for (row, raw) in rows.iter().enumerate() {
        if let Some(reason) = drop_reason(raw, params) {
            match reason {
                DropReason::MissingCategory => audit.missing_category += 1,
                DropReason::BelowMinNav => audit.below_min_nav += 1,
                DropReason::MissingFiveYearReturn => audit.missing_five_year_return += 1,
                DropReason::MissingThreeYearSharpe => audit.missing_three_year_sharpe += 1,
            }
            continue;
        }

        let raw_label = raw.category_name.as_deref().unwrap_or("").trim();
        let category = match labels.canonical(raw_label) {
            Some(canonical) => {
                audit.relabeled += 1;
                canonical.to_string()
            }
            None => {
                if audit.unmapped_labels.insert(raw_label.to_string()) {
                    tracing::debug!(
                        label = raw_label,
                        "category label has no mapping; kept as-is"
                    );
                }
                raw_label.to_string()
            }
        };

        records.push(to_record(row, category, raw));
    }

    audit.kept = records.len();
    tracing::info!(
        loaded = audit.loaded,
        kept = audit.kept,
        missing_category = audit.missing_category,
        below_min_nav = audit.below_min_nav,
        missing_five_year_return = audit.missing_five_year_return,
        missing_three_year_sharpe = audit.missing_three_year_sharpe,
        "cleaned screener rows"
    );
    if !audit.unmapped_labels.is_empty() {
        tracing::warn!(
            count = audit.unmapped_labels.len(),
            "category labels without a canonical mapping were passed through"
        );
    }

    Stage1Output { records, audit }
}

fn drop_reason(raw: &RawFundRow, params: &CleanParams) -> Option<DropReason> {
    let has_category = raw
        .category_name
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());
    if !has_category {
        return Some(DropReason::MissingCategory);
    }
    // NaN or absent fund size fails the comparison like any small fund.
    let nav_ok = finite(raw.fund_total_nav_rupees_millions)
        .is_some_and(|nav| nav >= params.min_nav_millions);
    if !nav_ok {
        return Some(DropReason::BelowMinNav);
    }
    if finite(raw.five_years_return_annual).is_none() {
        return Some(DropReason::MissingFiveYearReturn);
    }
    if finite(raw.three_years_sharpe).is_none() {
        return Some(DropReason::MissingThreeYearSharpe);
    }
    None
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn to_record(row: usize, category: String, raw: &RawFundRow) -> FundRecord {
    FundRecord {
        row,
        legal_name: raw.legal_name.clone().unwrap_or_default(),
        category,
        close_price: finite(raw.close_price),
        close_price_date: raw.close_price_date.clone(),
        medalist_rating_number: finite(raw.medalist_rating_number),
        star_rating_till_date: finite(raw.star_rating_till_date),
        one_year_return: finite(raw.one_year_return),
        three_years_return_annual: finite(raw.three_years_return_annual),
        five_years_return_annual: finite(raw.five_years_return_annual),
        ten_years_return_annual: finite(raw.ten_years_return_annual),
        expense_ratio: finite(raw.expense_ratio),
        initial_purchase: finite(raw.initial_purchase),
        fund_total_nav_rupees_millions: finite(raw.fund_total_nav_rupees_millions),
        risk_rating_till_date: finite(raw.risk_rating_till_date),
        one_year_alpha: finite(raw.one_year_alpha),
        three_years_alpha: finite(raw.three_years_alpha),
        five_years_alpha: finite(raw.five_years_alpha),
        one_year_beta: finite(raw.one_year_beta),
        three_years_beta: finite(raw.three_years_beta),
        five_years_beta: finite(raw.five_years_beta),
        one_year_standard_deviation: finite(raw.one_year_standard_deviation),
        three_years_standard_deviation: finite(raw.three_years_standard_deviation),
        five_years_standard_deviation: finite(raw.five_years_standard_deviation),
        one_year_sharpe: finite(raw.one_year_sharpe),
        three_years_sharpe: finite(raw.three_years_sharpe),
        five_years_sharpe: finite(raw.five_years_sharpe),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_clean.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::{MissingMetricPolicy, ScoredFundRecord};
use crate::pipeline::stage1_clean::{CleanAudit, CleanParams};
use crate::report::json::{render_ranking_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{
    CategorySummary, DroppedRows, InputSummary, RankedFund, ReportError, RowSummary, SummaryData,
    ToolMeta, format_f64_6, format_opt, median, p90, rank_within_categories,
};

const RANKING_HEADER: &[&str] = &[
    "category",
    "rank",
    "legal_name",
    "one_year_return",
    "three_years_return_annual",
    "five_years_return_annual",
    "three_years_sharpe",
    "five_years_sharpe",
    "return_score",
    "risk_score",
    "total_score",
    "close_price",
    "close_price_date",
    "medalist_rating_number",
    "star_rating_till_date",
    "ten_years_return_annual",
    "expense_ratio",
    "initial_purchase",
    "fund_total_nav_rupees_millions",
    "risk_rating_till_date",
    "one_year_alpha",
    "three_years_alpha",
    "five_years_alpha",
    "one_year_beta",
    "three_years_beta",
    "five_years_beta",
    "one_year_standard_deviation",
    "three_years_standard_deviation",
    "five_years_standard_deviation",
    "one_year_sharpe",
    "input_row",
];

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub scored: &'a [ScoredFundRecord],
    pub n_categories: usize,
    pub audit: &'a CleanAudit,
    pub substituted_metrics: usize,

    pub input_path: &'a Path,
    pub clean_params: &'a CleanParams,
    pub policy: MissingMetricPolicy,
    pub category_overrides: Option<&'a Path>,
    pub top_n: usize,

    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let ranked = rank_within_categories(input.scored);

    let ranking_path = out_dir.join("ranking.tsv");
    write_ranking_tsv(&ranked, &ranking_path)?;
    write_text(&out_dir.join("ranking.json"), &render_ranking_json(&ranked)?)?;

    let summary = build_summary(input, &ranked);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(
        &report_path,
        &render_report_text(&summary, &ranked, input.top_n),
    )?;

    tracing::info!(
        out_dir = %out_dir.display(),
        funds = input.scored.len(),
        "wrote ranking reports"
    );
    Ok(())
}

fn write_ranking_tsv(
    ranked: &BTreeMap<&str, Vec<RankedFund<'_>>>,
    path: &Path,
) -> Result<(), ReportError> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    w.write_record(RANKING_HEADER)?;

    for (category, funds) in ranked {
        for entry in funds {
            let r = &entry.fund.record;
            w.write_record([
                category.to_string(),
                entry.rank.to_string(),
                r.legal_name.clone(),
                format_opt(r.one_year_return),
                format_opt(r.three_years_return_annual),
                format_opt(r.five_years_return_annual),
                format_opt(r.three_years_sharpe),
                format_opt(r.five_years_sharpe),
                format_f64_6(entry.fund.return_score),
                format_f64_6(entry.fund.risk_score),
                format_f64_6(entry.fund.total_score),
                format_opt(r.close_price),
                r.close_price_date.clone().unwrap_or_default(),
                format_opt(r.medalist_rating_number),
                format_opt(r.star_rating_till_date),
                format_opt(r.ten_years_return_annual),
                format_opt(r.expense_ratio),
                format_opt(r.initial_purchase),
                format_opt(r.fund_total_nav_rupees_millions),
                format_opt(r.risk_rating_till_date),
                format_opt(r.one_year_alpha),
                format_opt(r.three_years_alpha),
                format_opt(r.five_years_alpha),
                format_opt(r.one_year_beta),
                format_opt(r.three_years_beta),
                format_opt(r.five_years_beta),
                format_opt(r.one_year_standard_deviation),
                format_opt(r.three_years_standard_deviation),
                format_opt(r.five_years_standard_deviation),
                format_opt(r.one_year_sharpe),
                r.row.to_string(),
            ])?;
        }
    }

    w.flush()?;
    Ok(())
}

fn build_summary(
    input: &Stage5Input<'_>,
    ranked: &BTreeMap<&str, Vec<RankedFund<'_>>>,
) -> SummaryData {
    let categories = ranked
        .iter()
        .map(|(category, funds)| {
            let totals: Vec<f64> = funds.iter().map(|f| f.fund.total_score).collect();
            CategorySummary {
                category: category.to_string(),
                n_funds: funds.len(),
                median_total_score: median(&totals),
                p90_total_score: p90(&totals),
                max_total_score: totals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                top_fund: funds
                    .first()
                    .map(|f| f.fund.record.legal_name.clone())
                    .unwrap_or_default(),
            }
        })
        .collect();

    let audit = input.audit;
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputSummary {
            path: input.input_path.display().to_string(),
            min_nav_millions: input.clean_params.min_nav_millions,
            missing_metric_policy: input.policy.name().to_string(),
            category_overrides: input
                .category_overrides
                .map(|p| p.display().to_string()),
        },
        rows: RowSummary {
            loaded: audit.loaded,
            kept: audit.kept,
            scored: input.scored.len(),
            dropped: DroppedRows {
                missing_category: audit.missing_category,
                below_min_nav: audit.below_min_nav,
                missing_five_year_return: audit.missing_five_year_return,
                missing_three_year_sharpe: audit.missing_three_year_sharpe,
            },
            relabeled: audit.relabeled,
            unmapped_labels: audit.unmapped_labels.iter().cloned().collect(),
            substituted_metrics: input.substituted_metrics,
        },
        n_categories: input.n_categories,
        categories,
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;

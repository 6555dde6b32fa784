use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub mod overrides;
pub mod reader;

use reader::open_maybe_gz;

/// Screener data points in export order. Columns are renamed by position,
/// so the header text itself is informational only.
pub const SCREENER_COLUMNS: [&str; 27] = [
    "legalName",
    "closePrice",
    "closePriceDate",
    "categoryName",
    "Medalist_RatingNumber",
    "starRatingM255",
    "returnM12",
    "returnM36",
    "returnM60",
    "returnM120",
    "expenseRatio",
    "initialPurchase",
    "fundTnav",
    "morningstarRiskM255",
    "alphaM12",
    "alphaM36",
    "alphaM60",
    "betaM12",
    "betaM36",
    "betaM60",
    "standardDeviationM12",
    "standardDeviationM36",
    "standardDeviationM60",
    "sharpeM12",
    "sharpeM36",
    "sharpeM60",
    "tenforeId",
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// One export line, deserialized positionally. Unparsable numeric cells
/// become `None` rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFundRow {
    pub legal_name: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub close_price: Option<f64>,
    pub close_price_date: Option<String>,
    pub category_name: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub medalist_rating_number: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub star_rating_till_date: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub one_year_return: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub three_years_return_annual: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub five_years_return_annual: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub ten_years_return_annual: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub expense_ratio: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub initial_purchase: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub fund_total_nav_rupees_millions: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub risk_rating_till_date: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub one_year_alpha: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub three_years_alpha: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub five_years_alpha: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub one_year_beta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub three_years_beta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub five_years_beta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub one_year_standard_deviation: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub three_years_standard_deviation: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub five_years_standard_deviation: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub one_year_sharpe: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub three_years_sharpe: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub five_years_sharpe: Option<f64>,
    pub tenfore_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScreenerExport {
    pub rows: Vec<RawFundRow>,
}

pub fn load_screener_csv(path: &Path) -> Result<ScreenerExport, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "screener export not found: {}",
            path.display()
        )));
    }

    let source = open_maybe_gz(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let n_columns = reader.headers()?.len();
    if n_columns != SCREENER_COLUMNS.len() {
        return Err(InputError::InvalidInput(format!(
            "expected {} columns in {}, found {}",
            SCREENER_COLUMNS.len(),
            path.display(),
            n_columns
        )));
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row: RawFundRow = record
            .deserialize(None)
            .map_err(|e| InputError::Parse(format!("row {}: {e}", idx + 1)))?;
        rows.push(row);
    }

    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        "loaded screener export"
    );

    Ok(ScreenerExport { rows })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

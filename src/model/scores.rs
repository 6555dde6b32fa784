use serde::Serialize;

use crate::model::fund::FundRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFundRecord {
    #[serde(flatten)]
    pub record: FundRecord,
    pub return_score: f64,
    pub risk_score: f64,
    pub total_score: f64,
}

impl ScoredFundRecord {
    pub fn new(record: FundRecord, return_score: f64, risk_score: f64) -> Self {
        Self {
            record,
            return_score,
            risk_score,
            total_score: return_score + risk_score,
        }
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }
}

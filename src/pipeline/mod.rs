pub mod stage1_clean;
pub mod stage2_validate;
pub mod stage3_partition;
pub mod stage4_score;
pub mod stage5_report;

use thiserror::Error;

use crate::model::Metric;

/// Precondition violations of the scoring core. Any of these aborts the run
/// before a single score is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("no fund records to score")]
    EmptyInput,
    #[error("row {row}: category is missing")]
    MissingCategory { row: usize },
    #[error("row {row} ({legal_name}): {metric} is missing")]
    MissingMetric {
        row: usize,
        legal_name: String,
        metric: Metric,
    },
    #[error("category {category}: empty population for {metric}")]
    EmptyPopulation { category: String, metric: Metric },
    #[error("category {category}: group has no members")]
    EmptyGroup { category: String },
}

use crate::model::{FundRecord, Metric, MissingMetricPolicy};
use crate::pipeline::ScoringError;

/// A record admitted to the scoring core, with its five scored metrics
/// resolved to concrete values in `Metric::index` order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFund {
    pub record: FundRecord,
    pub metrics: [f64; 5],
}

impl ValidatedFund {
    pub fn metric(&self, metric: Metric) -> f64 {
        self.metrics[metric.index()]
    }
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub funds: Vec<ValidatedFund>,
    pub substituted: usize,
}

pub fn run_stage2(
    records: Vec<FundRecord>,
    policy: MissingMetricPolicy,
) -> Result<Stage2Output, ScoringError> {
    if records.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let mut funds = Vec::with_capacity(records.len());
    let mut substituted = 0usize;

    for record in records {
        if record.category.trim().is_empty() {
            return Err(ScoringError::MissingCategory { row: record.row });
        }

        let mut metrics = [0.0f64; 5];
        for metric in Metric::ALL {
            metrics[metric.index()] = match (record.metric(metric), policy) {
                (Some(v), _) => v,
                (None, MissingMetricPolicy::Reject) => {
                    return Err(ScoringError::MissingMetric {
                        row: record.row,
                        legal_name: record.legal_name.clone(),
                        metric,
                    });
                }
                (None, MissingMetricPolicy::Lowest) => {
                    tracing::debug!(
                        row = record.row,
                        metric = metric.name(),
                        "missing metric ranked lowest"
                    );
                    substituted += 1;
                    f64::NEG_INFINITY
                }
            };
        }

        funds.push(ValidatedFund { record, metrics });
    }

    if substituted > 0 {
        tracing::warn!(
            substituted,
            policy = policy.name(),
            "missing metric values ranked below every defined value"
        );
    }

    Ok(Stage2Output { funds, substituted })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_validate.rs"]
mod tests;

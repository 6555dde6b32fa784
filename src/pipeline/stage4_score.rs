use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::model::percentile::PercentileRanker;
use crate::model::{Metric, ScoreWeights, ScoredFundRecord};
use crate::pipeline::ScoringError;
use crate::pipeline::stage2_validate::ValidatedFund;
use crate::pipeline::stage3_partition::CategoryGroup;

#[derive(Debug, Clone)]
pub struct Stage4Output {
    /// Categories ascending, funds in input order within a category.
    pub scored: Vec<ScoredFundRecord>,
    pub n_categories: usize,
}

/// Scores every member of one category against that category alone.
pub fn score_group(
    group: &CategoryGroup,
    weights: &ScoreWeights,
) -> Result<Vec<ScoredFundRecord>, ScoringError> {
    if group.is_empty() {
        return Err(ScoringError::EmptyGroup {
            category: group.category.clone(),
        });
    }

    let mut rankers = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let column = group.members.iter().map(|f| f.metric(metric)).collect();
        let ranker =
            PercentileRanker::new(column).ok_or_else(|| ScoringError::EmptyPopulation {
                category: group.category.clone(),
                metric,
            })?;
        rankers.push(ranker);
    }

    let weighted = |fund: &ValidatedFund, metrics: &[Metric]| {
        metrics
            .iter()
            .map(|&m| rankers[m.index()].percentile_of(fund.metric(m)) * weights.weight(m))
            .sum::<f64>()
    };

    let scored = group
        .members
        .iter()
        .map(|fund| {
            let return_score = weighted(fund, &Metric::RETURNS);
            let risk_score = weighted(fund, &Metric::RISK);
            ScoredFundRecord::new(fund.record.clone(), return_score, risk_score)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        category = %group.category,
        funds = scored.len(),
        "scored category"
    );
    Ok(scored)
}

/// Scores all groups in parallel and concatenates them in category order.
pub fn run_stage4(
    groups: &BTreeMap<String, CategoryGroup>,
    weights: &ScoreWeights,
) -> Result<Stage4Output, ScoringError> {
    if groups.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let per_group: Vec<Vec<ScoredFundRecord>> = groups
        .par_iter()
        .map(|(_, group)| score_group(group, weights))
        .collect::<Result<_, _>>()?;

    let scored: Vec<ScoredFundRecord> = per_group.into_iter().flatten().collect();
    tracing::info!(
        funds = scored.len(),
        categories = groups.len(),
        "scored all categories"
    );

    Ok(Stage4Output {
        scored,
        n_categories: groups.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_score.rs"]
mod tests;

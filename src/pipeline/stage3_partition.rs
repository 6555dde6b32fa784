use std::collections::BTreeMap;

use crate::pipeline::stage2_validate::ValidatedFund;

/// Funds sharing one category, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub members: Vec<ValidatedFund>,
}

impl CategoryGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Splits funds into disjoint groups keyed by exact category string.
pub fn partition_by_category(funds: Vec<ValidatedFund>) -> BTreeMap<String, CategoryGroup> {
    let mut groups: BTreeMap<String, CategoryGroup> = BTreeMap::new();
    for fund in funds {
        groups
            .entry(fund.record.category.clone())
            .or_insert_with_key(|category| CategoryGroup {
                category: category.clone(),
                members: Vec::new(),
            })
            .members
            .push(fund);
    }

    let singletons = groups.values().filter(|g| g.len() == 1).count();
    tracing::info!(
        categories = groups.len(),
        singletons,
        "partitioned funds by category"
    );
    groups
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_partition.rs"]
mod tests;

/// Weak (inclusive) percentile rank over a fixed population.
///
/// `percentile_of(x)` is the share of population values `<= x`, scaled to
/// 0..=100. Ties all count as at-or-below, so a population of identical
/// values ranks every member at 100.
#[derive(Debug, Clone)]
pub struct PercentileRanker {
    sorted: Vec<f64>,
}

impl PercentileRanker {
    /// Returns `None` for an empty population.
    pub fn new(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(|a, b| a.total_cmp(b));
        Some(Self { sorted: values })
    }

    pub fn count_at_or_below(&self, x: f64) -> usize {
        self.sorted.partition_point(|v| *v <= x)
    }

    pub fn percentile_of(&self, x: f64) -> f64 {
        self.count_at_or_below(x) as f64 / self.sorted.len() as f64 * 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/percentile.rs"]
mod tests;

use crate::model::fund::Metric;

/// Per-metric weights applied to 0..=100 percentiles.
///
/// Return weights sum to 0.80 and risk weights to 0.20, so the return score
/// tops out at 80, the risk score at 20 and the total at 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    pub one_year_return: f64,
    pub three_year_return: f64,
    pub five_year_return: f64,
    pub three_year_sharpe: f64,
    pub five_year_sharpe: f64,
}

impl ScoreWeights {
    pub fn default_v1() -> Self {
        Self {
            one_year_return: 0.30,
            three_year_return: 0.20,
            five_year_return: 0.30,
            three_year_sharpe: 0.08,
            five_year_sharpe: 0.12,
        }
    }

    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::OneYearReturn => self.one_year_return,
            Metric::ThreeYearReturn => self.three_year_return,
            Metric::FiveYearReturn => self.five_year_return,
            Metric::ThreeYearSharpe => self.three_year_sharpe,
            Metric::FiveYearSharpe => self.five_year_sharpe,
        }
    }

    pub fn max_return_score(&self) -> f64 {
        Metric::RETURNS.iter().map(|&m| self.weight(m) * 100.0).sum()
    }

    pub fn max_risk_score(&self) -> f64 {
        Metric::RISK.iter().map(|&m| self.weight(m) * 100.0).sum()
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// What the validator does with a scored metric that is absent after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMetricPolicy {
    /// Abort the run naming the first offending row.
    #[default]
    Reject,
    /// Rank the value below every defined value in its category.
    Lowest,
}

impl MissingMetricPolicy {
    pub fn name(self) -> &'static str {
        match self {
            MissingMetricPolicy::Reject => "reject",
            MissingMetricPolicy::Lowest => "lowest",
        }
    }
}

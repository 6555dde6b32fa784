use serde::Serialize;

/// One fund row in the canonical schema.
///
/// `row` is the zero-based position in the loaded file and is the record's
/// identity through the pipeline; legal names are not unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundRecord {
    pub row: usize,
    pub legal_name: String,
    pub category: String,

    pub close_price: Option<f64>,
    pub close_price_date: Option<String>,
    pub medalist_rating_number: Option<f64>,
    pub star_rating_till_date: Option<f64>,

    pub one_year_return: Option<f64>,
    pub three_years_return_annual: Option<f64>,
    pub five_years_return_annual: Option<f64>,
    pub ten_years_return_annual: Option<f64>,

    pub expense_ratio: Option<f64>,
    pub initial_purchase: Option<f64>,
    pub fund_total_nav_rupees_millions: Option<f64>,
    pub risk_rating_till_date: Option<f64>,

    pub one_year_alpha: Option<f64>,
    pub three_years_alpha: Option<f64>,
    pub five_years_alpha: Option<f64>,
    pub one_year_beta: Option<f64>,
    pub three_years_beta: Option<f64>,
    pub five_years_beta: Option<f64>,
    pub one_year_standard_deviation: Option<f64>,
    pub three_years_standard_deviation: Option<f64>,
    pub five_years_standard_deviation: Option<f64>,
    pub one_year_sharpe: Option<f64>,
    pub three_years_sharpe: Option<f64>,
    pub five_years_sharpe: Option<f64>,
}

impl FundRecord {
    #[cfg(test)]
    pub fn new(row: usize, legal_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            row,
            legal_name: legal_name.into(),
            category: category.into(),
            close_price: None,
            close_price_date: None,
            medalist_rating_number: None,
            star_rating_till_date: None,
            one_year_return: None,
            three_years_return_annual: None,
            five_years_return_annual: None,
            ten_years_return_annual: None,
            expense_ratio: None,
            initial_purchase: None,
            fund_total_nav_rupees_millions: None,
            risk_rating_till_date: None,
            one_year_alpha: None,
            three_years_alpha: None,
            five_years_alpha: None,
            one_year_beta: None,
            three_years_beta: None,
            five_years_beta: None,
            one_year_standard_deviation: None,
            three_years_standard_deviation: None,
            five_years_standard_deviation: None,
            one_year_sharpe: None,
            three_years_sharpe: None,
            five_years_sharpe: None,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::OneYearReturn => self.one_year_return,
            Metric::ThreeYearReturn => self.three_years_return_annual,
            Metric::FiveYearReturn => self.five_years_return_annual,
            Metric::ThreeYearSharpe => self.three_years_sharpe,
            Metric::FiveYearSharpe => self.five_years_sharpe,
        };
        value.filter(|v| v.is_finite())
    }
}

/// The five columns consumed by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    OneYearReturn,
    ThreeYearReturn,
    FiveYearReturn,
    ThreeYearSharpe,
    FiveYearSharpe,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::OneYearReturn,
        Metric::ThreeYearReturn,
        Metric::FiveYearReturn,
        Metric::ThreeYearSharpe,
        Metric::FiveYearSharpe,
    ];

    pub const RETURNS: [Metric; 3] = [
        Metric::OneYearReturn,
        Metric::ThreeYearReturn,
        Metric::FiveYearReturn,
    ];

    pub const RISK: [Metric; 2] = [Metric::ThreeYearSharpe, Metric::FiveYearSharpe];

    pub fn index(self) -> usize {
        match self {
            Metric::OneYearReturn => 0,
            Metric::ThreeYearReturn => 1,
            Metric::FiveYearReturn => 2,
            Metric::ThreeYearSharpe => 3,
            Metric::FiveYearSharpe => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::OneYearReturn => "one_year_return",
            Metric::ThreeYearReturn => "three_years_return_annual",
            Metric::FiveYearReturn => "five_years_return_annual",
            Metric::ThreeYearSharpe => "three_years_sharpe",
            Metric::FiveYearSharpe => "five_years_sharpe",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

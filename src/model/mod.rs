pub mod fund;
pub mod percentile;
pub mod scores;
pub mod weights;

pub use fund::{FundRecord, Metric};
pub use scores::ScoredFundRecord;
pub use weights::{MissingMetricPolicy, ScoreWeights};

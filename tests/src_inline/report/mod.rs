use super::*;
use crate::model::FundRecord;

fn scored(row: usize, category: &str, total: f64) -> ScoredFundRecord {
    ScoredFundRecord::new(
        FundRecord::new(row, format!("Fund {row}"), category),
        total * 0.8,
        total * 0.2,
    )
}

#[test]
fn test_quantiles() {
    let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_competition_ranks() {
    let funds = vec![
        scored(0, "value", 50.0),
        scored(1, "value", 90.0),
        scored(2, "value", 70.0),
        scored(3, "value", 90.0),
        scored(4, "elss", 10.0),
    ];
    let ranked = rank_within_categories(&funds);
    assert_eq!(ranked.keys().copied().collect::<Vec<_>>(), vec!["elss", "value"]);

    let value: Vec<(usize, usize)> = ranked["value"]
        .iter()
        .map(|r| (r.rank, r.fund.record.row))
        .collect();
    assert_eq!(value, vec![(1, 1), (1, 3), (3, 2), (4, 0)]);
    assert_eq!(ranked["elss"][0].rank, 1);
}

#[test]
fn test_format_helpers() {
    assert_eq!(format_f64_6(80.0), "80.000000");
    assert_eq!(format_opt(None), "");
    assert_eq!(format_opt(Some(1.5)), "1.500000");
}

#[test]
fn test_ranked_fund_serializes_flat() {
    let funds = vec![scored(0, "value", 100.0)];
    let ranked = rank_within_categories(&funds);
    let json = serde_json::to_value(ranked["value"][0]).unwrap();
    assert_eq!(json["rank"], 1);
    assert_eq!(json["category"], "value");
    assert_eq!(json["legal_name"], "Fund 0");
    assert_eq!(json["total_score"], 100.0);
    assert!(json["one_year_return"].is_null());
}

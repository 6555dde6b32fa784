use super::*;
use crate::model::FundRecord;
use crate::pipeline::stage3_partition::partition_by_category;

const EPS: f64 = 1e-9;

fn fund(row: usize, category: &str, metrics: [f64; 5]) -> ValidatedFund {
    ValidatedFund {
        record: FundRecord::new(row, format!("Fund {row}"), category),
        metrics,
    }
}

fn group(category: &str, members: Vec<ValidatedFund>) -> CategoryGroup {
    CategoryGroup {
        category: category.to_string(),
        members,
    }
}

fn by_row(scored: &[ScoredFundRecord], row: usize) -> &ScoredFundRecord {
    scored.iter().find(|s| s.record.row == row).unwrap()
}

fn mixed_funds() -> Vec<ValidatedFund> {
    vec![
        fund(0, "value", [12.0, 8.0, 9.5, 0.4, 0.7]),
        fund(1, "value", [18.5, 11.0, 7.0, 0.9, 0.3]),
        fund(2, "value", [3.0, 11.0, 15.2, 0.6, 0.6]),
        fund(3, "value", [18.5, 4.0, 11.1, 1.4, 1.1]),
        fund(4, "large_cap", [25.0, 14.0, 13.0, 1.1, 0.9]),
        fund(5, "large_cap", [21.0, 15.0, 12.5, 1.0, 1.0]),
        fund(6, "elss", [30.0, 20.0, 18.0, 1.5, 1.4]),
    ]
}

#[test]
fn test_singleton_scores_full_marks() {
    let g = group("contra", vec![fund(0, "contra", [-4.0, 1.0, 2.0, -0.3, 0.1])]);
    let scored = score_group(&g, &ScoreWeights::default_v1()).unwrap();
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].return_score, 80.0);
    assert_eq!(scored[0].risk_score, 20.0);
    assert_eq!(scored[0].total_score, 100.0);
}

#[test]
fn test_identical_members_all_score_hundred() {
    let members = (0..4)
        .map(|row| fund(row, "liquid", [6.8, 6.1, 5.9, 2.0, 1.8]))
        .collect();
    let scored = score_group(&group("liquid", members), &ScoreWeights::default_v1()).unwrap();
    for s in &scored {
        assert!((s.total_score - 100.0).abs() < EPS);
    }
}

#[test]
fn test_one_year_spread_scenario() {
    let v = 5.0;
    let members = vec![
        fund(0, "value", [10.0, v, v, v, v]),
        fund(1, "value", [20.0, v, v, v, v]),
        fund(2, "value", [30.0, v, v, v, v]),
    ];
    let scored = score_group(&group("value", members), &ScoreWeights::default_v1()).unwrap();

    assert!((by_row(&scored, 2).total_score - 100.0).abs() < EPS);
    assert!((by_row(&scored, 1).total_score - 90.0).abs() < EPS);
    assert!((by_row(&scored, 0).total_score - 80.0).abs() < EPS);
    assert!((by_row(&scored, 0).return_score - 60.0).abs() < EPS);
    assert!((by_row(&scored, 0).risk_score - 20.0).abs() < EPS);
}

#[test]
fn test_weighted_formula() {
    let members = vec![
        fund(0, "value", [1.0, 3.0, 2.0, 0.5, 0.1]),
        fund(1, "value", [2.0, 1.0, 3.0, 0.2, 0.3]),
        fund(2, "value", [3.0, 2.0, 1.0, 0.9, 0.2]),
        fund(3, "value", [4.0, 4.0, 4.0, 0.1, 0.4]),
    ];
    let scored = score_group(&group("value", members), &ScoreWeights::default_v1()).unwrap();

    // fund 0 percentiles: 25, 75, 50, 75, 25
    let f0 = by_row(&scored, 0);
    assert!((f0.return_score - (25.0 * 0.30 + 75.0 * 0.20 + 50.0 * 0.30)).abs() < EPS);
    assert!((f0.risk_score - (75.0 * 0.08 + 25.0 * 0.12)).abs() < EPS);
    assert!((f0.total_score - (f0.return_score + f0.risk_score)).abs() < EPS);
}

#[test]
fn test_maximum_gets_full_percentile_with_ties() {
    let members = vec![
        fund(0, "value", [9.0, 1.0, 1.0, 1.0, 1.0]),
        fund(1, "value", [9.0, 1.0, 1.0, 1.0, 1.0]),
        fund(2, "value", [2.0, 1.0, 1.0, 1.0, 1.0]),
    ];
    let scored = score_group(&group("value", members), &ScoreWeights::default_v1()).unwrap();
    assert!((by_row(&scored, 0).total_score - 100.0).abs() < EPS);
    assert!((by_row(&scored, 1).total_score - 100.0).abs() < EPS);
}

#[test]
fn test_ranges_hold() {
    let groups = partition_by_category(mixed_funds());
    let out = run_stage4(&groups, &ScoreWeights::default_v1()).unwrap();
    assert_eq!(out.scored.len(), 7);
    for s in &out.scored {
        assert!(s.return_score >= 0.0 && s.return_score <= 80.0 + EPS);
        assert!(s.risk_score >= 0.0 && s.risk_score <= 20.0 + EPS);
        assert!(s.total_score >= 0.0 && s.total_score <= 100.0 + EPS);
    }
}

#[test]
fn test_categories_do_not_influence_each_other() {
    let low = vec![
        fund(0, "debt", [1.0, 1.0, 1.0, 0.1, 0.1]),
        fund(1, "debt", [2.0, 2.0, 2.0, 0.2, 0.2]),
    ];
    let high = vec![
        fund(2, "equity", [100.0, 100.0, 100.0, 10.0, 10.0]),
        fund(3, "equity", [200.0, 200.0, 200.0, 20.0, 20.0]),
    ];
    let mut all = low.clone();
    all.extend(high);
    let out = run_stage4(&partition_by_category(all), &ScoreWeights::default_v1()).unwrap();

    let alone = run_stage4(&partition_by_category(low), &ScoreWeights::default_v1()).unwrap();
    assert_eq!(by_row(&out.scored, 0).total_score, by_row(&alone.scored, 0).total_score);
    assert_eq!(by_row(&out.scored, 1).total_score, 100.0);
    assert_eq!(by_row(&out.scored, 3).total_score, 100.0);
    assert_eq!(by_row(&out.scored, 0).total_score, by_row(&out.scored, 2).total_score);
}

#[test]
fn test_order_independent() {
    let funds = mixed_funds();
    let forward = run_stage4(&partition_by_category(funds.clone()), &ScoreWeights::default_v1())
        .unwrap();
    let mut reversed_input = funds.clone();
    reversed_input.reverse();
    reversed_input.swap(1, 4);
    let reversed = run_stage4(&partition_by_category(reversed_input), &ScoreWeights::default_v1())
        .unwrap();

    for f in &funds {
        let a = by_row(&forward.scored, f.record.row);
        let b = by_row(&reversed.scored, f.record.row);
        assert_eq!(a.total_score.to_bits(), b.total_score.to_bits());
        assert_eq!(a.return_score.to_bits(), b.return_score.to_bits());
    }
}

#[test]
fn test_recombination_order_and_records_preserved() {
    let funds = mixed_funds();
    let out = run_stage4(&partition_by_category(funds.clone()), &ScoreWeights::default_v1())
        .unwrap();
    assert_eq!(out.n_categories, 3);

    let order: Vec<(&str, usize)> = out
        .scored
        .iter()
        .map(|s| (s.category(), s.record.row))
        .collect();
    assert_eq!(
        order,
        vec![
            ("elss", 6),
            ("large_cap", 4),
            ("large_cap", 5),
            ("value", 0),
            ("value", 1),
            ("value", 2),
            ("value", 3),
        ]
    );
    for f in &funds {
        assert_eq!(by_row(&out.scored, f.record.row).record, f.record);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let groups = partition_by_category(mixed_funds());
    let weights = ScoreWeights::default_v1();
    let parallel = run_stage4(&groups, &weights).unwrap();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let sequential = pool.install(|| run_stage4(&groups, &weights)).unwrap();
    assert_eq!(parallel.scored, sequential.scored);
}

#[test]
fn test_missing_value_ranked_lowest() {
    let members = vec![
        fund(0, "value", [f64::NEG_INFINITY, 1.0, 1.0, 1.0, 1.0]),
        fund(1, "value", [5.0, 1.0, 1.0, 1.0, 1.0]),
        fund(2, "value", [6.0, 1.0, 1.0, 1.0, 1.0]),
        fund(3, "value", [7.0, 1.0, 1.0, 1.0, 1.0]),
    ];
    let scored = score_group(&group("value", members), &ScoreWeights::default_v1()).unwrap();
    assert!((by_row(&scored, 0).total_score - (25.0 * 0.30 + 70.0)).abs() < EPS);
    assert!((by_row(&scored, 1).total_score - (50.0 * 0.30 + 70.0)).abs() < EPS);
}

#[test]
fn test_empty_group_rejected() {
    let err = score_group(&group("value", Vec::new()), &ScoreWeights::default_v1()).unwrap_err();
    assert_eq!(
        err,
        ScoringError::EmptyGroup {
            category: "value".to_string()
        }
    );

    let mut groups = BTreeMap::new();
    groups.insert("value".to_string(), group("value", Vec::new()));
    groups.insert(
        "elss".to_string(),
        group("elss", vec![fund(0, "elss", [1.0; 5])]),
    );
    assert!(run_stage4(&groups, &ScoreWeights::default_v1()).is_err());
    assert_eq!(
        run_stage4(&BTreeMap::new(), &ScoreWeights::default_v1()).unwrap_err(),
        ScoringError::EmptyInput
    );
}

#[test]
fn test_weight_profile_bounds() {
    let w = ScoreWeights::default_v1();
    assert!((w.max_return_score() - 80.0).abs() < EPS);
    assert!((w.max_risk_score() - 20.0).abs() < EPS);
}

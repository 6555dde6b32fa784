use std::collections::{BTreeMap, BTreeSet};

use super::defs::builtin_categories;
use super::*;

#[test]
fn test_builtin_lookup() {
    let map = CategoryMap::builtin();
    assert_eq!(map.canonical("ELSS (Tax Savings)"), Some("elss"));
    assert_eq!(map.canonical("10 yr Government Bond"), Some("ten_yr_government_bond"));
    assert_eq!(map.canonical("  Large-Cap "), Some("large_cap"));
    assert_eq!(map.canonical("Sector - Auto"), None);
    assert_eq!(map.len(), builtin_categories().len());
}

#[test]
fn test_builtin_table_is_unique() {
    let raw: BTreeSet<&str> = builtin_categories().iter().map(|(r, _)| *r).collect();
    let canonical: BTreeSet<&str> = builtin_categories().iter().map(|(_, c)| *c).collect();
    assert_eq!(raw.len(), builtin_categories().len());
    assert_eq!(canonical.len(), builtin_categories().len());
    for c in canonical {
        assert!(
            c.chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'),
            "{c}"
        );
    }
}

#[test]
fn test_lookup_is_case_sensitive() {
    let map = CategoryMap::builtin();
    assert_eq!(map.canonical("large-cap"), None);
}

#[test]
fn test_overrides_replace_and_extend() {
    let mut overrides = BTreeMap::new();
    overrides.insert("Large-Cap".to_string(), "large_cap_equity".to_string());
    overrides.insert("Sector - Auto".to_string(), "sector_auto".to_string());

    let map = CategoryMap::builtin().with_overrides(&overrides);
    assert_eq!(map.canonical("Large-Cap"), Some("large_cap_equity"));
    assert_eq!(map.canonical("Sector - Auto"), Some("sector_auto"));
    assert_eq!(map.canonical("Mid-Cap"), Some("mid_cap"));
}

#[test]
fn test_from_pairs_substitutes_table() {
    let map = CategoryMap::from_pairs([("Equity", "equity")]);
    assert_eq!(map.canonical("Equity"), Some("equity"));
    assert_eq!(map.canonical("Large-Cap"), None);
    assert_eq!(map.len(), 1);
    assert_eq!(CategoryMap::default().len(), 0);
}

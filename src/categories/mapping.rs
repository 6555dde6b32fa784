use std::collections::BTreeMap;

use crate::categories::defs::builtin_categories;

/// Immutable raw-label -> canonical-label lookup, built once per run.
///
/// Lookups match on the trimmed raw label exactly. Labels without an entry
/// are passed through unchanged by the cleaning stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    labels: BTreeMap<String, String>,
}

impl CategoryMap {
    pub fn builtin() -> Self {
        Self::from_pairs(builtin_categories().iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut labels = BTreeMap::new();
        for (raw, canonical) in pairs {
            let raw: String = raw.into();
            labels.insert(raw.trim().to_string(), canonical.into());
        }
        Self { labels }
    }

    /// Entries in `overrides` replace or extend the current table.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (raw, canonical) in overrides {
            self.labels
                .insert(raw.trim().to_string(), canonical.trim().to_string());
        }
        self
    }

    pub fn canonical(&self, raw: &str) -> Option<&str> {
        self.labels.get(raw.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

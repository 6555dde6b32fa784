use std::collections::BTreeMap;
use std::path::Path;

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

/// Reads a JSON object of raw category label to canonical label.
pub fn load_category_overrides(path: &Path) -> Result<BTreeMap<String, String>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "category override file not found: {}",
            path.display()
        )));
    }
    let reader = open_maybe_gz(path)?;
    let map: BTreeMap<String, String> = serde_json::from_reader(reader)?;
    for (raw, canonical) in &map {
        if raw.trim().is_empty() || canonical.trim().is_empty() {
            return Err(InputError::InvalidInput(format!(
                "empty label in category overrides: {raw:?} -> {canonical:?}"
            )));
        }
    }
    tracing::info!(
        path = %path.display(),
        entries = map.len(),
        "loaded category overrides"
    );
    Ok(map)
}

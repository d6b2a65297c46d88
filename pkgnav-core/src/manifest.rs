//! Reading the `name` field out of a located manifest.

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Returns the package name declared by the manifest at `manifest_path`.
///
/// Only a present, non-empty JSON string counts as a name. Unreadable
/// files, malformed JSON, a missing field, `null`, the empty string, and
/// non-string values all collapse to `None`; the distinction is logged
/// here, not signaled to the caller.
pub fn read_package_name(manifest_path: &Path) -> Option<String> {
    let content = match fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Failed to read {}: {}", manifest_path.display(), e);
            return None;
        }
    };

    let json: Value = match serde_json::from_str(&content) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!("Failed to parse {}: {}", manifest_path.display(), e);
            return None;
        }
    };

    let name = json
        .get("name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    if name.is_none() {
        tracing::debug!(
            "{} has no usable name field",
            manifest_path.display()
        );
    }

    name
}

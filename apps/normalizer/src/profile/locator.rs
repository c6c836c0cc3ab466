use serde_json::Value;

use crate::profile::path::read;

/// Keys whose presence marks the body itself as the profile record.
const PROFILE_MARKERS: &[&str] = &["profile_id", "positions", "experience"];

/// Nested locations searched, in order, when the body is not the profile itself.
const PROFILE_PATHS: &[&[&str]] = &[
    &["profile_data"],
    &["context", "profile_data"],
    &["context", "user", "context", "profile_data"],
];

/// Finds the raw profile record inside a decoded request body.
///
/// The first candidate location whose key is present wins, whatever its value.
/// Returns `None` when no location matches.
pub fn locate_profile(body: &Value) -> Option<&Value> {
    let object = body.as_object()?;
    if PROFILE_MARKERS.iter().any(|key| object.contains_key(*key)) {
        tracing::debug!("Request body is the profile record");
        return Some(body);
    }

    PROFILE_PATHS.iter().find_map(|path| {
        let found = read(body, path)?;
        tracing::debug!("Found profile record at {}", path.join("."));
        Some(found)
    })
}

use serde_json::Value;

use crate::models::position::{CanonicalPosition, UNKNOWN_COMPANY};
use crate::profile::fields::to_text;
use crate::profile::path::{read, read_array};
use crate::profile::position::normalize_position;

/// A candidate profile schema: a pure function that either extracts at least
/// one position or returns `None`.
pub type Hypothesis = fn(&Value) -> Option<Vec<CanonicalPosition>>;

/// Known profile schemas, most preferred first.
pub const HYPOTHESES: &[(&str, Hypothesis)] = &[
    ("grouped", grouped),
    ("positions", flat_positions),
    ("experience", flat_experience),
];

/// Normalizes a profile record into canonical positions.
///
/// The first hypothesis that yields anything wins; later ones are not consulted
/// even when their keys are present. Returns an empty list when nothing matched.
pub fn normalize_profile(profile: &Value) -> Vec<CanonicalPosition> {
    HYPOTHESES
        .iter()
        .find_map(|(name, hypothesis)| {
            let positions = hypothesis(profile)?;
            tracing::debug!(
                "Profile matched '{name}' schema with {} position(s)",
                positions.len()
            );
            Some(positions)
        })
        .unwrap_or_default()
}

/// `position_groups[].profile_positions[]`, with each group's `company.name`
/// as the default company for its positions.
pub fn grouped(profile: &Value) -> Option<Vec<CanonicalPosition>> {
    let groups = read_array(profile, &["position_groups"])?;

    let positions: Vec<_> = groups
        .iter()
        .flat_map(|group| {
            let company = read(group, &["company", "name"])
                .map(to_text)
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
            read_array(group, &["profile_positions"])
                .into_iter()
                .flatten()
                .filter_map(move |record| normalize_position(record, &company))
        })
        .collect();

    non_empty(positions)
}

/// Top-level `positions[]`.
pub fn flat_positions(profile: &Value) -> Option<Vec<CanonicalPosition>> {
    flat_list(profile, "positions")
}

/// Top-level `experience[]`.
pub fn flat_experience(profile: &Value) -> Option<Vec<CanonicalPosition>> {
    flat_list(profile, "experience")
}

fn flat_list(profile: &Value, key: &str) -> Option<Vec<CanonicalPosition>> {
    let records = read_array(profile, &[key])?;
    non_empty(
        records
            .iter()
            .filter_map(|record| normalize_position(record, UNKNOWN_COMPANY))
            .collect(),
    )
}

fn non_empty(positions: Vec<CanonicalPosition>) -> Option<Vec<CanonicalPosition>> {
    (!positions.is_empty()).then_some(positions)
}

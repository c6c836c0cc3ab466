use serde_json::Value;

use crate::models::position::{CanonicalPosition, UNKNOWN_TITLE};
use crate::profile::dates::{resolve_date, DateBound};
use crate::profile::fields::resolve_text;

const TITLE_ALIASES: &[&str] = &["title", "position", "role"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "summary"];
const COMPANY_ALIASES: &[&str] = &["company", "company_name", "organization"];

/// Normalizes one raw position record. Returns `None` when `record` is not an
/// object, meaning "not a position"; callers skip it.
pub fn normalize_position(record: &Value, default_company: &str) -> Option<CanonicalPosition> {
    if !record.is_object() {
        return None;
    }

    let start = resolve_date(record, DateBound::Start);
    let end = resolve_date(record, DateBound::End);
    let date_range = if start.is_empty() {
        end
    } else {
        format!("{start} - {end}")
    };

    Some(CanonicalPosition {
        company: resolve_text(record, COMPANY_ALIASES, default_company),
        title: resolve_text(record, TITLE_ALIASES, UNKNOWN_TITLE),
        date_range,
        description: resolve_text(record, DESCRIPTION_ALIASES, ""),
    })
}

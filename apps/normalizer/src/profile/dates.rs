use serde_json::Value;

use crate::profile::fields::{is_truthy, resolve_field, to_text};
use crate::profile::path::read;

/// Default end date for positions that have not ended.
pub const PRESENT: &str = "Present";

const START_ALIASES: &[&str] = &["start_date", "from_date"];
const END_ALIASES: &[&str] = &["end_date", "to_date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

impl DateBound {
    fn structured_key(self) -> &'static str {
        match self {
            DateBound::Start => "start",
            DateBound::End => "end",
        }
    }

    fn flat_aliases(self) -> &'static [&'static str] {
        match self {
            DateBound::Start => START_ALIASES,
            DateBound::End => END_ALIASES,
        }
    }
}

/// Resolves one bound of a position's date range.
///
/// Tries the structured `date.<start|end>.{year,month}` encoding first
/// (`"<month>/<year>"`, or `"<year>"` without a month), then the flat alias
/// fields. A missing end date is [`PRESENT`]; a missing start date is empty.
pub fn resolve_date(position: &Value, bound: DateBound) -> String {
    let key = bound.structured_key();

    if let Some(year) = read(position, &["date", key, "year"]).filter(|v| is_truthy(v)) {
        return match read(position, &["date", key, "month"]).filter(|v| is_truthy(v)) {
            Some(month) => format!("{}/{}", to_text(month), to_text(year)),
            None => to_text(year),
        };
    }

    match resolve_field(position, bound.flat_aliases()) {
        Some(value) => to_text(value),
        None if bound == DateBound::End => PRESENT.to_string(),
        None => String::new(),
    }
}

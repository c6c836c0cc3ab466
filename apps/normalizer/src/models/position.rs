use serde::{Deserialize, Serialize};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// One normalized job/role entry. Every field is always populated; defaults are
/// substituted for anything the source record did not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPosition {
    pub company: String,
    pub title: String,
    /// `"<start> - <end>"`, or just `<end>` when the record has no start date.
    pub date_range: String,
    pub description: String,
}

use crate::models::position::CanonicalPosition;

pub const NO_POSITIONS_TEXT: &str = "No position information available.";

/// Renders positions as a plain-text block for an LLM prompt, one block per
/// position in input order: company, `title (date_range)`, description, blank line.
pub fn format_for_llm(positions: &[CanonicalPosition]) -> String {
    if positions.is_empty() {
        return NO_POSITIONS_TEXT.to_string();
    }

    positions
        .iter()
        .map(|p| {
            format!(
                "{}\n{} ({})\n{}\n\n",
                p.company, p.title, p.date_range, p.description
            )
        })
        .collect()
}

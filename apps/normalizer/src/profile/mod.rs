//! Schema-tolerant profile normalizer.
//!
//! Flow: `locator` finds the profile record inside the request body, `hypotheses`
//! tries each known profile schema in priority order (normalizing individual
//! records through `position`, `fields`, `dates` and `path`), and `formatter`
//! renders the result. `handler::execute` wraps the pipeline so every call
//! returns a well-formed 200 response.

pub mod dates;
pub mod fields;
pub mod formatter;
pub mod handler;
pub mod hypotheses;
pub mod locator;
pub mod path;
pub mod position;

pub mod config;
pub mod errors;
pub mod harness;
pub mod models;
pub mod profile;

pub use models::envelope::{InvocationMetadata, ResponseBody, ResponseEnvelope};
pub use models::position::CanonicalPosition;
pub use profile::handler::execute;

//! Local invocation harness: fabricates the request envelope a function would
//! receive in production and runs a handler against it.

pub mod context;
pub mod runner;

pub use context::InvocationContext;
pub use runner::{load_json_file, LocalRunner};

pub mod envelope;
pub mod position;

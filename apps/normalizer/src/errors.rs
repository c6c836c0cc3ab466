use thiserror::Error;

use crate::models::envelope::ResponseBody;

/// Faults the normalizer can hit while handling one invocation.
/// None of these ever reach the caller as a failure: the handler renders them
/// into an error-shaped 200 response via [`NormalizeError::into_response_body`].
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("request body must be a JSON object, got {0}")]
    BodyNotObject(&'static str),

    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl NormalizeError {
    pub fn into_response_body(self) -> ResponseBody {
        match &self {
            NormalizeError::BodyNotObject(kind) => {
                tracing::error!("Rejected request body of type {kind}");
            }
            NormalizeError::Panicked(msg) => {
                tracing::error!("Handler panicked: {msg}");
            }
        }
        ResponseBody::error(self.to_string())
    }
}

/// Human-readable JSON type name, used in error descriptions.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

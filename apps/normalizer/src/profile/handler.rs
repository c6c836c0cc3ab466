use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::{json_kind, NormalizeError};
use crate::models::envelope::{DebugInfo, InvocationMetadata, ResponseBody, ResponseEnvelope};
use crate::profile::fields::is_truthy;
use crate::profile::formatter::format_for_llm;
use crate::profile::hypotheses::normalize_profile;
use crate::profile::locator::locate_profile;
use crate::profile::path::read;

/// Function entry point: request envelope in, response envelope out.
///
/// Never fails and always answers 200. Missing profile data and internal faults
/// (including panics) are reported in the body.
pub fn execute(event: &Value, _metadata: &InvocationMetadata) -> ResponseEnvelope {
    ResponseEnvelope::ok(&guarded(|| process(event)))
}

/// Runs the pipeline for one decoded event.
pub fn process(event: &Value) -> Result<ResponseBody, NormalizeError> {
    let body = decode_body(event)?;
    let profile = locate_profile(&body);
    let debug_info = debug_info(profile);

    let Some(profile) = profile.filter(|p| is_truthy(p)) else {
        info!("No profile data found in request");
        return Ok(ResponseBody::no_profile(debug_info));
    };

    let positions = normalize_profile(profile);
    info!("Normalized {} position(s)", positions.len());
    let formatted_text = format_for_llm(&positions);

    Ok(ResponseBody::positions(formatted_text, positions, debug_info))
}

/// Failure boundary: errors and panics both become an error-shaped body.
fn guarded<F>(pipeline: F) -> ResponseBody
where
    F: FnOnce() -> Result<ResponseBody, NormalizeError>,
{
    panic::catch_unwind(AssertUnwindSafe(pipeline))
        .unwrap_or_else(|payload| Err(NormalizeError::Panicked(panic_message(payload.as_ref()))))
        .unwrap_or_else(NormalizeError::into_response_body)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Extracts the request body. A missing body or one that is not valid JSON is
/// treated as empty; a body that decodes to anything but an object is a fault.
fn decode_body(event: &Value) -> Result<Value, NormalizeError> {
    let body = match read(event, &["body"]) {
        None => return Ok(Value::Object(Map::new())),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Request body is not valid JSON, treating as empty: {e}");
                return Ok(Value::Object(Map::new()));
            }
        },
        Some(other) => other.clone(),
    };

    if body.is_object() {
        Ok(body)
    } else {
        Err(NormalizeError::BodyNotObject(json_kind(&body)))
    }
}

fn debug_info(profile: Option<&Value>) -> DebugInfo {
    DebugInfo {
        found_profile_data: profile.is_some_and(is_truthy),
        profile_data_keys: profile
            .and_then(Value::as_object)
            .filter(|o| !o.is_empty())
            .map(|o| o.keys().cloned().collect()),
    }
}

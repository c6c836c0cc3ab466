use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::models::position::CanonicalPosition;

pub const NO_PROFILE_MESSAGE: &str = "No profile data provided";

/// What the caller gets back from every invocation. The status is always 200;
/// success, missing data and faults are told apart by the body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded [`ResponseBody`].
    pub body: String,
}

impl ResponseEnvelope {
    pub fn ok(body: &ResponseBody) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize response body: {e}");
            json!({
                "message": "Error processing request: response serialization failed",
                "formatted_text": "",
                "parsed_positions": [],
                "error_details": e.to_string(),
            })
            .to_string()
        });
        ResponseEnvelope {
            status_code: 200,
            body,
        }
    }

    pub fn decode_body(&self) -> Result<ResponseBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Decoded response body. One struct covers the success, no-data and error
/// shapes; absent optional fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub formatted_text: String,
    pub parsed_positions: Vec<CanonicalPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl ResponseBody {
    pub fn positions(
        formatted_text: String,
        parsed_positions: Vec<CanonicalPosition>,
        debug_info: DebugInfo,
    ) -> Self {
        ResponseBody {
            message: None,
            formatted_text,
            parsed_positions,
            debug_info: Some(debug_info),
            error_details: None,
        }
    }

    pub fn no_profile(debug_info: DebugInfo) -> Self {
        ResponseBody {
            message: Some(NO_PROFILE_MESSAGE.to_string()),
            formatted_text: String::new(),
            parsed_positions: vec![],
            debug_info: Some(debug_info),
            error_details: None,
        }
    }

    pub fn error(details: String) -> Self {
        ResponseBody {
            message: Some(format!("Error processing request: {details}")),
            formatted_text: String::new(),
            parsed_positions: vec![],
            debug_info: None,
            error_details: Some(details),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub found_profile_data: bool,
    /// Keys of the located profile record; `null` unless it is a non-empty mapping.
    pub profile_data_keys: Option<Vec<String>>,
}

/// Invocation metadata handed to a function alongside the event. The profile
/// normalizer ignores it; the local harness fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationMetadata {
    pub function_name: String,
    pub function_version: String,
    pub invoked_function_arn: String,
    pub memory_limit_in_mb: u32,
    pub aws_request_id: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl InvocationMetadata {
    pub fn local(function_name: &str, memory_limit_in_mb: u32) -> Self {
        InvocationMetadata {
            function_name: function_name.to_string(),
            function_version: "$LATEST".to_string(),
            invoked_function_arn: format!(
                "arn:aws:lambda:local:000000000000:function:{function_name}"
            ),
            memory_limit_in_mb,
            aws_request_id: Uuid::new_v4().to_string(),
            log_group_name: format!("/aws/lambda/{function_name}"),
            log_stream_name: function_name.to_string(),
        }
    }
}

impl Default for InvocationMetadata {
    fn default() -> Self {
        InvocationMetadata::local("local-test", 128)
    }
}

//! CallResponse - Decoded reply from the call server

use serde_json::{Map, Value};

use crate::domain::errors::SubmitError;

/// Server reply body.
///
/// Success bodies carry `call_sid`, failure bodies carry `error`. Nothing
/// forces either to be present; that contract belongs to the server. Other
/// keys are ignored whatever their type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallResponse {
    pub call_sid: Option<String>,
    pub error: Option<String>,
}

impl CallResponse {
    /// Read `call_sid` and `error` from a JSON object.
    ///
    /// `null` counts as absent; non-string values keep their JSON text.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            call_sid: text_field(object, "call_sid"),
            error: text_field(object, "error"),
        }
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Undecoded HTTP reply as handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status codes
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as a `CallResponse`, whatever the status.
    ///
    /// The body must be a JSON object.
    pub fn decode(&self) -> Result<CallResponse, SubmitError> {
        match serde_json::from_str::<Value>(&self.body)? {
            Value::Object(object) => Ok(CallResponse::from_object(&object)),
            other => Err(SubmitError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

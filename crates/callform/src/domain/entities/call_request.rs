//! CallRequest - Payload for starting an outbound call

use serde::{Deserialize, Serialize};

/// The three form fields, serialized as the `/make-call` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub phone_number: String,
    pub voice: String,
    pub prompt: String,
}

impl CallRequest {
    /// Create a new call request. No field is validated locally.
    pub fn new(
        phone_number: impl Into<String>,
        voice: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            voice: voice.into(),
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_wire_keys() {
        let request = CallRequest::new("+15551234567", "alloy", "Say hello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "phone_number": "+15551234567",
                "voice": "alloy",
                "prompt": "Say hello",
            })
        );
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let request = CallRequest::new("", "", "");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"phone_number": "", "voice": "", "prompt": ""}));
    }
}

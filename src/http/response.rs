//! Response envelopes and status mapping.
//!
//! # Design Decisions
//! - API routes answer with a `{message, body}` envelope; `body` is omitted
//!   when there is nothing to carry
//! - Status 520 is a deliberate non-standard marker for "the data layer
//!   failed upstream of us", preserved exactly for client compatibility

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// The `{message, body}` JSON wrapper used by the API routes.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl Envelope {
    /// Envelope carrying collaborator-returned JSON.
    pub fn with_body(message: impl Into<String>, body: Value) -> Self {
        Self {
            message: message.into(),
            body: Some(body),
        }
    }

    /// Envelope with a message only.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            body: None,
        }
    }
}

/// Non-standard status signalling a data-layer failure to the client.
pub fn upstream_data_error() -> StatusCode {
    // 520 is inside the valid 100..=999 range.
    StatusCode::from_u16(520).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_body() {
        let envelope = Envelope::with_body("done", json!({"id": 3}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"message": "done", "body": {"id": 3}}));
    }

    #[test]
    fn test_message_only_omits_body_field() {
        let envelope = Envelope::message_only("oops");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"message": "oops"}));
    }

    #[test]
    fn test_upstream_data_error_code() {
        assert_eq!(upstream_data_error().as_u16(), 520);
    }
}

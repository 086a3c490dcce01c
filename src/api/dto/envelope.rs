//! The uniform response wrapper.
//!
//! Every endpoint answers with `{status, message, data}`. Success is 200,
//! domain failures are 400; the message text, not the status code, tells
//! the failure kinds apart.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// HTTP-style status code, duplicated into the body
    #[schema(example = 200)]
    pub status: u16,
    /// Human-readable outcome description
    pub message: String,
    /// Payload; always present as a field, null when there is none
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success envelope without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope carrying only the explanation.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_all_three_fields() {
        let envelope = Envelope::ok("done", 42);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn message_envelope_keeps_null_data_field() {
        let envelope = Envelope::<i32>::message("nothing here");
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.as_object().unwrap().contains_key("data"));
        assert!(json["data"].is_null());
    }

    #[test]
    fn failure_envelope_carries_status() {
        let envelope = Envelope::<()>::failure(StatusCode::BAD_REQUEST, "nope");
        assert_eq!(envelope.status, 400);
        assert!(envelope.data.is_none());
    }
}

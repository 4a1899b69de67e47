//! Error response DTOs.

use serde::Serialize;

/// Standard error response payload.
///
/// Every error the service produces on its own serializes to this
/// two-field shape, e.g.
/// `{"error":"Invalid JSON format","message":"Please check your request body format"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with a short error label and a
    /// client-facing message.
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_two_field_object() {
        let body = ErrorResponse::new("Invalid JSON format", "Please check your request body format");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"error":"Invalid JSON format","message":"Please check your request body format"}"#
        );
    }
}

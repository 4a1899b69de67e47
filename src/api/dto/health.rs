//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status; always `"OK"` while the process can respond
    pub status: String,
    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
    /// Seconds since process startup, fractional
    pub uptime: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_field_names() {
        let response = HealthResponse {
            status: "OK".to_string(),
            timestamp: "2024-01-01T12:00:00.000Z".to_string(),
            uptime: 1.5,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["uptime"], 1.5);
        assert!(json["timestamp"].is_string());
    }
}

use thiserror::Error;

/// Application-wide error type covering every failure class the service
/// can surface to a client.
///
/// Each variant carries enough structure for the HTTP response mapping in
/// `api::middleware::error_handler` to match it exhaustively; no status
/// codes or message strings are decided here.
#[derive(Error, Debug)]
pub enum AppError {
    /// A request body declared as JSON failed to parse
    #[error("JSON body parse failure: {detail}")]
    InvalidJsonBody { detail: String },

    /// The raw request body could not be read from the transport
    #[error("Unreadable request body: {detail}")]
    UnreadableBody { detail: String },

    /// A request body declared as form data failed to parse
    #[error("Form body parse failure: {detail}")]
    MalformedFormBody { detail: String },

    /// Request payload failed shape validation
    #[error("Validation failed: {detail}")]
    Validation { detail: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Client rejected by the request guard
    #[error("Client denied: {message}")]
    ClientDenied { message: String },

    /// Client exceeded the request guard's rate limit
    #[error("Too many requests")]
    RateLimited,

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_body_display() {
        let err = AppError::InvalidJsonBody {
            detail: "expected value at line 1 column 6".to_string(),
        };
        assert!(err.to_string().contains("JSON body parse failure"));
    }

    #[test]
    fn test_anyhow_conversion_maps_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}

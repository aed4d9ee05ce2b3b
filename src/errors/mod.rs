//! Error handling module for the course admin client.
//!
//! Provides one error type for validation, transport and response-shape failures,
//! plus the parser for the error envelopes the backend sends back.

use serde::Deserialize;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const RESPONSE_SHAPE: &str = "RESPONSE_SHAPE";
    pub const INCOMPLETE: &str = "INCOMPLETE";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Client-side validation failed; no request was sent
    Validation(String),
    /// Backend answered with a non-2xx status
    Http { status: u16, message: String },
    /// Transport failure (connect, timeout, TLS)
    Network(String),
    /// Response body could not be decoded
    Decode(String),
    /// Response decoded but lacks something the caller depends on
    ResponseShape(String),
    /// Composite create stopped half way; created records stay on the backend
    Incomplete {
        subject_id: String,
        created: usize,
        failed: usize,
        message: String,
    },
    /// Local file error
    Io(String),
}

impl AppError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Http { .. } => codes::HTTP_ERROR,
            AppError::Network(_) => codes::NETWORK_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
            AppError::ResponseShape(_) => codes::RESPONSE_SHAPE,
            AppError::Incomplete { .. } => codes::INCOMPLETE,
            AppError::Io(_) => codes::IO_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Http { status, message } => format!("HTTP {}: {}", status, message),
            AppError::Network(msg) => msg.clone(),
            AppError::Decode(msg) => msg.clone(),
            AppError::ResponseShape(msg) => msg.clone(),
            AppError::Incomplete {
                subject_id,
                created,
                failed,
                message,
            } => format!(
                "subject {} created, {} study time(s) created, {} failed: {}",
                subject_id, created, failed, message
            ),
            AppError::Io(msg) => msg.clone(),
        }
    }

    /// True when the failure happened before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Io(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP client error: {:?}", err);
        if err.is_decode() {
            AppError::Decode(format!("Response body: {}", err))
        } else if let Some(status) = err.status() {
            AppError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::Network(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        AppError::Io(format!("IO error: {}", err))
    }
}

/// Error details in the structured error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Error bodies the backend is known to send.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    /// `{"success": false, "error": {"code": ..., "message": ...}}`
    Structured { error: ErrorDetails },
    /// `{"error": "text"}`
    Plain { error: String },
    /// `{"message": "text"}`
    Message { message: String },
}

/// Extract a human-readable message from a failed response body.
///
/// Falls back to the raw text when the body is not one of the known envelopes.
pub fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Structured { error }) => match error.code {
            Some(code) => format!("{} ({})", error.message, code),
            None => error.message,
        },
        Ok(ErrorBody::Plain { error }) => error,
        Ok(ErrorBody::Message { message }) => message,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_body() {
        assert_eq!(
            error_message_from_body(r#"{"error":"subject not found"}"#),
            "subject not found"
        );
    }

    #[test]
    fn test_structured_error_body() {
        let body = r#"{"success":false,"error":{"code":"NOT_FOUND","message":"Subject CS999 not found"}}"#;
        assert_eq!(
            error_message_from_body(body),
            "Subject CS999 not found (NOT_FOUND)"
        );
    }

    #[test]
    fn test_unknown_error_body_kept_verbatim() {
        assert_eq!(error_message_from_body(" bad gateway \n"), "bad gateway");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation("x".into()).error_code(),
            codes::VALIDATION_ERROR
        );
        let http = AppError::Http {
            status: 404,
            message: "gone".into(),
        };
        assert_eq!(http.status_code(), Some(404));
        assert_eq!(http.to_string(), "HTTP_ERROR: HTTP 404: gone");
        assert!(AppError::Validation("x".into()).is_local());
        assert!(!http.is_local());
    }
}

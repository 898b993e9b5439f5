use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

/// Fallback shown when the backend rejects a login without explaining why.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when the login request never produced a usable response.
pub const LOGIN_FAILED_RETRY: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum DashboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed with HTTP status {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DashboardError {
    /// Text suitable for an inline error banner or toast.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Validation(msg)
            | DashboardError::Authentication(msg)
            | DashboardError::Forbidden(msg) => msg.clone(),
            DashboardError::Http { status, message } => match message {
                Some(msg) if !msg.trim().is_empty() => msg.clone(),
                _ => format!("Server responded with status {}", status),
            },
            DashboardError::Network(msg) => format!("Could not reach the server: {}", msg),
            DashboardError::Conversion(msg) => format!("Unexpected response from the server: {}", msg),
            DashboardError::Storage(msg) => format!("Browser storage is unavailable: {}", msg),
        }
    }

    pub fn is_client_side(&self) -> bool {
        matches!(self, DashboardError::Validation(_) | DashboardError::Forbidden(_))
    }
}

impl From<ValidationErrors> for DashboardError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for DashboardError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(DashboardError::Validation("bad".into()), "bad" ; "validation passes through")]
    #[test_case(DashboardError::Forbidden("nope".into()), "nope" ; "forbidden passes through")]
    #[test_case(DashboardError::Http { status: 500, message: None }, "Server responded with status 500" ; "http without body")]
    #[test_case(DashboardError::Http { status: 404, message: Some("User not found".into()) }, "User not found" ; "http with body")]
    #[test_case(DashboardError::Http { status: 502, message: Some("  ".into()) }, "Server responded with status 502" ; "http with blank body")]
    fn test_user_message(error: DashboardError, expected: &str) {
        assert_eq!(error.user_message(), expected);
    }

    #[test]
    fn test_json_error_becomes_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let converted: DashboardError = err.into();
        assert!(matches!(converted, DashboardError::Conversion(_)));
    }

    #[test]
    fn test_client_side_classification() {
        assert!(DashboardError::Validation("x".into()).is_client_side());
        assert!(DashboardError::Forbidden("x".into()).is_client_side());
        assert!(!DashboardError::Network("x".into()).is_client_side());
    }

    #[test]
    fn test_display_includes_status() {
        let err = DashboardError::Http { status: 401, message: None };
        assert_eq!(err.to_string(), "Request failed with HTTP status 401");
    }
}

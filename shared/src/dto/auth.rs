use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Request body for `POST /users/admin-login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct AdminLoginRequest {
    /// The username typed into the login form
    #[validate(custom = "validate_not_blank")]
    pub user_id: String,

    #[validate(custom = "validate_not_blank")]
    pub password: String,
}

impl AdminLoginRequest {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

/// Body returned by the login endpoint.
///
/// Both fields are optional on the wire: a success status without `user_id`
/// is still treated as a failed login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AdminLoginResponse {
    /// The authenticated identifier, if the backend supplied a non-empty one.
    pub fn authenticated_user(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_login_request_validation() {
        assert!(AdminLoginRequest::new("admin", "secret").validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_blank_fields() {
        let errors = AdminLoginRequest::new("   ", "secret").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));

        let errors = AdminLoginRequest::new("admin", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        assert!(!errors.field_errors().contains_key("user_id"));
    }

    #[test]
    fn test_login_request_wire_shape() {
        let json = serde_json::to_value(AdminLoginRequest::new("admin", "pw")).unwrap();
        assert_eq!(json, serde_json::json!({ "user_id": "admin", "password": "pw" }));
    }

    #[test]
    fn test_login_response_without_user_id() {
        let response: AdminLoginResponse = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(response.authenticated_user(), None);
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_login_response_blank_user_id_is_not_authenticated() {
        let response: AdminLoginResponse = serde_json::from_str(r#"{"user_id":""}"#).unwrap();
        assert_eq!(response.authenticated_user(), None);
    }

    #[test]
    fn test_login_response_with_user_id() {
        let response: AdminLoginResponse = serde_json::from_str(r#"{"user_id":"admin","role":"owner"}"#).unwrap();
        assert_eq!(response.authenticated_user(), Some("admin"));
    }
}

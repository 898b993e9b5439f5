use log::{debug, error};
use validator::Validate;

use crate::api::AdminApi;
use crate::dto::auth::AdminLoginRequest;
use crate::error::{DashboardError, Result, LOGIN_FAILED, LOGIN_FAILED_RETRY};

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password";

/// Checks the credentials locally, then authenticates against the backend.
///
/// Returns the identifier to hand to the session on success. Every failure
/// is a [`DashboardError::Validation`] or [`DashboardError::Authentication`]
/// whose message can be shown as is. Blank input never reaches `api`.
pub async fn submit_login<A>(api: &A, username: &str, password: &str) -> Result<String>
where
    A: AdminApi + ?Sized,
{
    let request = AdminLoginRequest::new(username, password);
    if request.validate().is_err() {
        return Err(DashboardError::Validation(MISSING_CREDENTIALS.to_string()));
    }

    debug!("Attempting admin login for {}", request.user_id);

    match api.admin_login(&request).await {
        Ok(response) => match response.authenticated_user() {
            Some(user_id) => {
                debug!("Admin login accepted for {}", user_id);
                Ok(user_id.to_string())
            }
            None => {
                error!("Login response carried no user id");
                Err(DashboardError::Authentication(
                    non_blank(response.message).unwrap_or_else(|| LOGIN_FAILED.to_string()),
                ))
            }
        },
        Err(DashboardError::Http { status, message }) => {
            error!("Login rejected with status {}", status);
            Err(DashboardError::Authentication(
                non_blank(message).unwrap_or_else(|| LOGIN_FAILED.to_string()),
            ))
        }
        Err(e) => {
            error!("Login error: {}", e);
            Err(DashboardError::Authentication(LOGIN_FAILED_RETRY.to_string()))
        }
    }
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::dto::auth::AdminLoginResponse;
    use crate::state::session::{MemorySessionStore, Session};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn accepting_api(user_id: &'static str) -> MockAdminApi {
        let mut api = MockAdminApi::new();
        api.expect_admin_login().times(1).returning(move |_| {
            Ok(AdminLoginResponse {
                user_id: Some(user_id.to_string()),
                message: None,
            })
        });
        api
    }

    #[tokio::test]
    async fn test_successful_login_authenticates_session() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login()
            .withf(|req| req.user_id == "admin" && req.password == "hunter2")
            .times(1)
            .returning(|req| {
                Ok(AdminLoginResponse {
                    user_id: Some(req.user_id.clone()),
                    message: None,
                })
            });

        let store = MemorySessionStore::default();
        let mut session = Session::anonymous();
        let user_id = submit_login(&api, "admin", "hunter2").await.unwrap();
        session.login(&user_id, &store);

        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), "admin");
    }

    #[tokio::test]
    async fn test_session_takes_identifier_from_response() {
        let api = accepting_api("canonical-admin");
        let user_id = submit_login(&api, "Admin", "pw").await.unwrap();
        assert_eq!(user_id, "canonical-admin");
    }

    #[tokio::test]
    async fn test_unauthorized_shows_login_failed() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login()
            .times(1)
            .returning(|_| Err(DashboardError::Http { status: 401, message: None }));

        let session = Session::anonymous();
        let err = submit_login(&api, "admin", "wrong").await.unwrap_err();

        assert_eq!(err, DashboardError::Authentication("Login failed".to_string()));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login().times(1).returning(|_| {
            Err(DashboardError::Http {
                status: 403,
                message: Some("Not an admin account".to_string()),
            })
        });

        let err = submit_login(&api, "bob", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Not an admin account");
    }

    #[tokio::test]
    async fn test_success_status_without_identifier_fails() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login()
            .times(1)
            .returning(|_| Ok(AdminLoginResponse::default()));

        let err = submit_login(&api, "admin", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Login failed");
    }

    #[tokio::test]
    async fn test_network_failure_asks_to_retry() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login()
            .times(1)
            .returning(|_| Err(DashboardError::Network("connection refused".to_string())));

        let err = submit_login(&api, "admin", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Login failed. Please try again.");
    }

    #[tokio::test]
    async fn test_malformed_body_asks_to_retry() {
        let mut api = MockAdminApi::new();
        api.expect_admin_login()
            .times(1)
            .returning(|_| Err(DashboardError::Conversion("expected value".to_string())));

        let err = submit_login(&api, "admin", "pw").await.unwrap_err();
        assert!(matches!(err, DashboardError::Authentication(_)));
    }

    proptest! {
        #[test]
        fn prop_blank_input_never_calls_backend(
            username in "[ \t]{0,4}|[a-z]{1,8}",
            password in "[ \t]{0,4}",
        ) {
            let mut api = MockAdminApi::new();
            api.expect_admin_login().never();

            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let result = rt.block_on(submit_login(&api, &username, &password));

            prop_assert_eq!(result, Err(DashboardError::Validation(MISSING_CREDENTIALS.to_string())));
        }

        #[test]
        fn prop_blank_username_never_calls_backend(
            username in "[ \t]{0,4}",
            password in "[a-zA-Z0-9]{1,12}",
        ) {
            let mut api = MockAdminApi::new();
            api.expect_admin_login().never();

            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let result = rt.block_on(submit_login(&api, &username, &password));

            prop_assert!(matches!(result, Err(DashboardError::Validation(_))));
        }

        #[test]
        fn prop_accepted_credentials_authenticate(
            username in "[a-z][a-z0-9_]{0,11}",
            password in "[!-~]{1,16}",
        ) {
            let mut api = MockAdminApi::new();
            api.expect_admin_login().times(1).returning(|req| {
                Ok(AdminLoginResponse { user_id: Some(req.user_id.clone()), message: None })
            });

            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let user_id = rt.block_on(submit_login(&api, &username, &password)).unwrap();

            let store = MemorySessionStore::default();
            let mut session = Session::anonymous();
            session.login(&user_id, &store);
            prop_assert!(session.is_authenticated());
            prop_assert_eq!(session.user_id(), username.as_str());
        }
    }
}

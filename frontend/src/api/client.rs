use async_trait::async_trait;
use log::debug;
use shared::api::endpoints;
use shared::{
    AdminApi, AdminLoginRequest, AdminLoginResponse, AnalyticsSnapshot, DashboardConfig,
    DashboardError, Result, UsersPage,
};

use crate::api::utils::{conversion_error, error_from_response, network_error, request};

/// [`AdminApi`] over `fetch`, rooted at the configured backend URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpAdminApi {
    config: DashboardConfig,
}

impl HttpAdminApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

#[async_trait(?Send)]
impl AdminApi for HttpAdminApi {
    async fn admin_login(&self, login_request: &AdminLoginRequest) -> Result<AdminLoginResponse> {
        debug!("POST {}", endpoints::ADMIN_LOGIN);

        let response = request("POST", &self.url(endpoints::ADMIN_LOGIN))
            .json(login_request)
            .map_err(|e| DashboardError::Conversion(format!("Failed to serialize login request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<AdminLoginResponse>()
            .await
            .map_err(conversion_error)
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot> {
        debug!("GET {}", endpoints::ANALYTICS);

        let response = request("GET", &self.url(endpoints::ANALYTICS))
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<AnalyticsSnapshot>()
            .await
            .map_err(conversion_error)
    }

    async fn fetch_users(&self, skip: u64, limit: u64) -> Result<UsersPage> {
        let path = endpoints::users(skip, limit);
        debug!("GET {}", path);

        let response = request("GET", &self.url(&path))
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response.json::<UsersPage>().await.map_err(conversion_error)
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let path = endpoints::user(user_id);
        debug!("DELETE {}", path);

        let response = request("DELETE", &self.url(&path))
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        debug!("Deleted user {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_urls_are_rooted_at_config() {
        let config = DashboardConfig::from_values(Some("http://localhost:8000/"), None, None);
        let api = HttpAdminApi::new(&config);
        assert_eq!(api.url(endpoints::ANALYTICS), "http://localhost:8000/dashboard/analytics/");
        assert_eq!(
            api.url(&endpoints::users(100, 50)),
            "http://localhost:8000/dashboard/users/?skip=100&limit=50"
        );
    }
}

use gloo_net::http::{Request, RequestBuilder, Response};
use log::debug;
use shared::{DashboardError, ErrorResponse};

/// Creates a request builder for `method` against an absolute `url`
pub fn request(method: &str, url: &str) -> RequestBuilder {
    match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url), // Default to GET
    }
    .header("Accept", "application/json")
}

pub fn network_error(e: gloo_net::Error) -> DashboardError {
    DashboardError::Network(e.to_string())
}

pub fn conversion_error(e: gloo_net::Error) -> DashboardError {
    DashboardError::Conversion(e.to_string())
}

/// Turns a non-success response into [`DashboardError::Http`], keeping the
/// backend's message when the body carries one.
pub async fn error_from_response(response: Response) -> DashboardError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    debug!("HTTP {} from {}: {:?}", status, response.url(), message);
    DashboardError::Http { status, message }
}

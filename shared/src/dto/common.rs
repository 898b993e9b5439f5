use serde::{Deserialize, Serialize};

/// Error body returned by the backend.
///
/// The login route answers with `message`, framework-level failures with
/// `detail`; either is accepted. A non-string `detail` (validation error
/// lists) fails to decode and is treated as absent by callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, alias = "detail")]
    pub message: Option<String>,
}

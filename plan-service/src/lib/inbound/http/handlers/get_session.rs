use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AuthResult;

/// Report the caller's authentication state without ever rejecting.
///
/// Anonymous callers get `success: false` with null identity fields, not an
/// error response. Runs behind the optional authentication middleware.
pub async fn get_session(Extension(auth): Extension<AuthResult>) -> Json<SessionResponseData> {
    let (user_id, email) = match auth.identity {
        Some(identity) => (Some(identity.user_id), Some(identity.email)),
        None => (None, None),
    };

    Json(SessionResponseData {
        success: auth.success,
        user_id,
        email,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub email: Option<String>,
}

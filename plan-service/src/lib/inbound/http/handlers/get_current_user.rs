use auth::Identity;
use axum::Extension;
use axum::Json;
use serde::Serialize;

/// Return the identity of the authenticated caller.
///
/// Runs behind the mandatory authentication middleware, which guarantees
/// the `Identity` extension is present by the time this handler executes.
pub async fn get_current_user(
    Extension(identity): Extension<Identity>,
) -> Json<CurrentUserResponseData> {
    Json(CurrentUserResponseData {
        success: true,
        user: identity,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub success: bool,
    pub user: Identity,
}

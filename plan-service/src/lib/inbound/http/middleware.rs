use auth::AuthOutcome;
use auth::Identity;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type storing the outcome of the optional authentication gate.
///
/// Built fresh for every request and dropped with it. Anonymous requests
/// carry `success: false` and no identity.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub success: bool,
    pub identity: Option<Identity>,
}

impl AuthResult {
    fn authenticated(identity: Identity) -> Self {
        Self {
            success: true,
            identity: Some(identity),
        }
    }

    fn anonymous() -> Self {
        Self {
            success: false,
            identity: None,
        }
    }
}

/// Middleware that requires a valid bearer token.
///
/// Rejections are terminal: the 401 response is written here and no
/// downstream handler runs. Successful requests continue with the verified
/// `Identity` stored in the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    match state.verifier.check_header(bearer_header(&req)) {
        AuthOutcome::Authenticated(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        AuthOutcome::MissingHeader => Err(unauthorized(
            "UNAUTHORIZED",
            "Authentication token required.",
        )),
        AuthOutcome::InvalidToken => Err(unauthorized(
            "INVALID_TOKEN",
            "Invalid authentication token.",
        )),
    }
}

/// Middleware that attempts authentication but never rejects.
///
/// Handlers read the outcome from the `AuthResult` extension; failed or
/// absent credentials leave the request anonymous rather than producing an
/// error response.
pub async fn authenticate_optional(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let result = match state.verifier.check_header(bearer_header(&req)) {
        AuthOutcome::Authenticated(identity) => AuthResult::authenticated(identity),
        AuthOutcome::MissingHeader | AuthOutcome::InvalidToken => AuthResult::anonymous(),
    };

    req.extensions_mut().insert(result);
    next.run(req).await
}

fn bearer_header(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Build a 401 response in the wire format clients already depend on.
///
/// The `error` code distinguishes absent credentials from rejected ones;
/// the reason a token was rejected is logged upstream and never exposed.
fn unauthorized(error: &'static str, message: &str) -> Response {
    tracing::warn!(error, "Request rejected");
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}

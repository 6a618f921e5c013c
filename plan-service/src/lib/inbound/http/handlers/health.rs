use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

/// Liveness probe. Takes no credentials and touches no state.
pub async fn health() -> Json<HealthResponseData> {
    Json(HealthResponseData {
        status: "OK",
        timestamp: Utc::now(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

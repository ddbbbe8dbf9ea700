//! GET /health — liveness probe for the deployment platform.

use axum::Json;
use serde::Serialize;

/// Response payload for /health.
#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

/// Handler: GET /health
///
/// Always answers 200 while the process is up; dependency health is a
/// startup concern, not a liveness one.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

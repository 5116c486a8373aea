// GET /api/v1/health: liveness check, always 200.

use axum::response::IntoResponse;
use axum::Json;

use crate::db::now_timestamp;

pub const SERVICE_NAME: &str = "quarry";

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": now_timestamp(),
    }))
}

// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use tracing::debug;

use crate::types::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse::healthy())
}

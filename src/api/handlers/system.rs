// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::api::types::HealthResponse;
use crate::api::AppState;

/// Service health
#[utoipa::path(
    get,
    path = "/system/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

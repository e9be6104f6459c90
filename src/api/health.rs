use crate::service::AttendanceService;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "2024-03-01T09:02:11.123456")]
    pub timestamp: String,
    #[schema(example = "connected")]
    pub database: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(service: web::Data<AttendanceService>) -> impl Responder {
    let database = if service.store().ping().await {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        database: database.to_string(),
    })
}

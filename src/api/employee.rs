use super::{present, reject};
use crate::error::ApiError;
use crate::service::AttendanceService;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterEmployee {
    /// Base64-encoded photo (JPEG, PNG, ...).
    #[schema(example = "/9j/4AAQSkZJRgABAQ...", value_type = String)]
    pub image: Option<String>,
    #[schema(example = "alice", value_type = String)]
    pub name: Option<String>,
}

/// Register Employee
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterEmployee,
    responses(
        (status = 200, description = "Employee registered", body = Object, example = json!({
            "message": "alice registered successfully"
        })),
        (status = 400, description = "Missing fields, no usable face or duplicate name", body = Object, example = json!({
            "error": "Employee already registered",
            "kind": "duplicate_name"
        })),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Registration failed",
            "kind": "internal"
        }))
    ),
    tag = "Employee"
)]
#[instrument(name = "register", skip_all)]
pub async fn register(
    service: web::Data<AttendanceService>,
    payload: web::Json<RegisterEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let (Some(image), Some(name)) = (present(payload.image), present(payload.name)) else {
        return Err(ApiError::validation("Image and name are required"));
    };

    service
        .register(&name, &image)
        .await
        .map_err(|e| reject(e, "Registration failed"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} registered successfully", name.trim())
    })))
}

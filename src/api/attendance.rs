use super::{present, reject};
use crate::error::ApiError;
use crate::service::AttendanceService;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AttendanceCheck {
    /// Base64-encoded photo of the person checking in or out.
    #[schema(example = "/9j/4AAQSkZJRgABAQ...", value_type = String)]
    pub image: Option<String>,
}

/// Log in or log out whoever is in the photo
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = AttendanceCheck,
    responses(
        (status = 200, description = "Attendance toggled", body = Object, example = json!({
            "message": "alice logged in at 09:02:11"
        })),
        (status = 400, description = "Missing image, no usable face, empty registry or unknown face", body = Object, example = json!({
            "error": "Face not recognized",
            "kind": "face_not_recognized"
        })),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Attendance failed",
            "kind": "internal"
        }))
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance", skip_all)]
pub async fn check_attendance(
    service: web::Data<AttendanceService>,
    payload: web::Json<AttendanceCheck>,
) -> Result<HttpResponse, ApiError> {
    let Some(image) = present(payload.into_inner().image) else {
        return Err(ApiError::validation("Image is required"));
    };

    let event = service
        .check_attendance(&image)
        .await
        .map_err(|e| reject(e, "Attendance failed"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": event.message()
    })))
}

use crate::api::attendance::AttendanceCheck;
use crate::api::employee::RegisterEmployee;
use crate::api::health::HealthResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Face Attendance API",
        version = "0.1.0",
        description = r#"
## Face Attendance

Enroll employees from a photo, then log them in and out by showing their face.

### 🔹 Endpoints
- **Register**: enroll a name with the first face found in a photo
- **Attendance**: identify the face in a photo and toggle that employee between logged in and logged out
- **Health**: liveness plus database connectivity

### 📦 Request Format
Photos are sent as base64-encoded image files (JPEG, PNG, ...) inside a JSON body.

### ❗ Errors
Failures return `{"error": "...", "kind": "..."}`. Rejections are `400`, unexpected failures are `500`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::register,
        crate::api::attendance::check_attendance,
        crate::api::health::health
    ),
    components(
        schemas(
            RegisterEmployee,
            AttendanceCheck,
            HealthResponse
        )
    ),
    tags(
        (name = "Employee", description = "Face enrollment"),
        (name = "Attendance", description = "Face-based log in / log out"),
        (name = "Health", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub mod attendance;
pub mod employee;
pub mod health;

use crate::error::{ApiError, AppError};
use actix_web::{HttpRequest, error::JsonPayloadError};
use tracing::{debug, error, info};

/// Logs a failed request and converts it for the client. `context` doubles
/// as the generic message for internal failures.
pub(crate) fn reject(err: AppError, context: &str) -> ApiError {
    if err.is_internal() {
        error!(error = %err, "{}", context);
    } else {
        let kind: &'static str = err.kind().into();
        info!(kind, reason = %err, "Request rejected");
    }
    ApiError::from_app(err, context)
}

/// Malformed bodies are validation failures; oversized ones keep actix's 413.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            err.into()
        }
        other => {
            debug!(error = %other, "Rejected request body");
            ApiError::validation("Invalid JSON body").into()
        }
    }
}

/// Treats a missing or blank string field as absent.
pub(crate) fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

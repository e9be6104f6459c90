use crate::face::{DecodeError, ExtractError};
use crate::model::employee::EncodingError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use strum::IntoStaticStr;
use thiserror::Error;

/// Closed set of failure kinds a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NoFaceDetected,
    EncodingFailed,
    DuplicateName,
    NoEmployeesRegistered,
    FaceNotRecognized,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("No face detected in the image")]
    NoFaceDetected,
    #[error("Could not encode face")]
    EncodingFailed,
    #[error("Employee already registered")]
    DuplicateName,
    #[error("No registered employees found")]
    NoEmployeesRegistered,
    #[error("Face not recognized")]
    FaceNotRecognized,

    #[error("image decode failed: {0}")]
    ImageDecode(#[from] DecodeError),
    #[error("face extractor: {0}")]
    Extractor(#[from] ExtractError),
    #[error("stored encoding for {name:?} is corrupt: {source}")]
    CorruptEncoding {
        name: String,
        #[source]
        source: EncodingError,
    },
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NoFaceDetected => ErrorKind::NoFaceDetected,
            AppError::EncodingFailed => ErrorKind::EncodingFailed,
            AppError::DuplicateName => ErrorKind::DuplicateName,
            AppError::NoEmployeesRegistered => ErrorKind::NoEmployeesRegistered,
            AppError::FaceNotRecognized => ErrorKind::FaceNotRecognized,
            AppError::ImageDecode(_)
            | AppError::Extractor(_)
            | AppError::CorruptEncoding { .. }
            | AppError::Database(_) => ErrorKind::Internal,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

/// Error as returned to the HTTP client.
///
/// Internal failures carry a generic message; the detail only goes to the log.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Converts a service error, replacing internal details with `generic`.
    pub fn from_app(err: AppError, generic: &str) -> Self {
        let kind = err.kind();
        let message = if kind == ErrorKind::Internal {
            generic.to_string()
        } else {
            err.to_string()
        };
        Self { kind, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let kind: &'static str = self.kind.into();
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.message,
            "kind": kind,
        }))
    }
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Tagged application error. The HTTP status and logging policy are derived
/// from the kind: client mistakes map to 400, failures of the hosted service
/// map to 500 and are logged server-side.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid file type. Only JPEG, PNG and JPG are allowed.")]
    UnsupportedImageType,
    #[error("File too large")]
    FileTooLarge,
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Multipart(String),
    #[error("{0}")]
    ExternalService(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnsupportedImageType
            | AppError::FileTooLarge
            | AppError::Decode(_)
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalService(_) | AppError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error.message = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(
            AppError::Validation("Name is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Decode("location is not valid JSON".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedImageType.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::FileTooLarge.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn downstream_errors_map_to_internal_server_error() {
        assert_eq!(
            AppError::ExternalService("duplicate key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upload_rejection_keeps_exact_message() {
        assert_eq!(
            AppError::UnsupportedImageType.to_string(),
            "Invalid file type. Only JPEG, PNG and JPG are allowed."
        );
        assert_eq!(AppError::FileTooLarge.to_string(), "File too large");
    }
}

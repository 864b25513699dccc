use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use homepage_editor_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::CategoryNotFound(_) | DomainError::ServiceNotFound { .. } => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }

            DomainError::CategoryAlreadyExists(_) | DomainError::ServiceAlreadyExists { .. } => {
                (StatusCode::CONFLICT, self.0.to_string())
            }

            DomainError::Format(_) => {
                error!(error = %self.0, "Document file is malformed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }

            DomainError::Io(_) => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

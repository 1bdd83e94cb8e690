use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Errors surfaced by the job/bid service layer.
///
/// Every validation failure carries a user-actionable message; store
/// failures are reported once with a generic body and never retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Deadline over")]
    DeadlinePassed,

    #[error("You have already bid on this job post")]
    DuplicateBid,

    #[error("Action is not permitted")]
    InvalidTransition,

    #[error("{0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) | ServiceError::DeadlinePassed => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::DuplicateBid | ServiceError::InvalidTransition => StatusCode::CONFLICT,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Database(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Store failures are logged with detail but reported generically.
        let message = match self {
            ServiceError::Database(e) => {
                tracing::error!("Database error: {e}");
                "Internal server error".to_string()
            }
            ServiceError::Internal(e) => {
                tracing::error!("Internal error: {e}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message,
        }))
    }
}

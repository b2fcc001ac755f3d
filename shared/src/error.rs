use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0} not found")]
    EntityNotFound(String),
    #[error("{field} is already taken")]
    UniquenessViolation { field: &'static str },
    #[error("{0} reference was not resolved before projection")]
    ReferenceUnresolved(&'static str),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to convert stored value: {0}")]
    ConversionEntityError(String),
    #[error("database query failed")]
    DbQueryError(#[source] sqlx::Error),
    #[error("database transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("no rows were affected")]
    NoRowsAffectedError,
    #[error("key-value store operation failed")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("password hashing failed")]
    PasswordHashError(#[from] bcrypt::BcryptError),
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("operation not permitted for this user")]
    ForbiddenOperation,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnprocessableEntity(_) | Self::UniquenessViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::EntityNotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            Self::ForbiddenOperation => StatusCode::FORBIDDEN,
            Self::ReferenceUnresolved(_)
            | Self::ConversionEntityError(_)
            | Self::DbQueryError(_)
            | Self::TransactionError(_)
            | Self::NoRowsAffectedError
            | Self::KeyValueStoreError(_)
            | Self::PasswordHashError(_)
            | Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "client error happened"
            );
        }
        (status_code, Json(json!({ "errors": { "message": self.to_string() } })))
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_violation_names_the_field() {
        let err = AppError::UniquenessViolation { field: "email" };
        assert_eq!(err.to_string(), "email is already taken");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unresolved_reference_is_a_server_error() {
        let err = AppError::ReferenceUnresolved("seller");
        assert!(err.status_code().is_server_error());
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::EntityNotFound("item".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}

//! Error mapping - classifies every handler failure into the closed
//! taxonomy and renders RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use feed_shared::ErrorResponse;
use std::fmt;

use feed_core::error::{DomainError, RepoError};
use feed_core::ports::AuthError;

/// Application-level error type; one variant per failure kind crossing the
/// system boundary.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    Unauthenticated,
    Unauthorized,
    Conflict(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Unauthenticated => write!(f, "Unauthenticated"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::Unauthenticated => ErrorResponse::unauthenticated(),
            AppError::Unauthorized => ErrorResponse::forbidden(),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail.clone()),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::Internal(detail) => {
                // Log internal detail; the client gets a generic message.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Unauthenticated => AppError::Unauthenticated,
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            // Handlers only issue tokens; verification failures already
            // resolved to the anonymous context in the extractor.
            AuthError::Signing(msg) | AuthError::Hashing(msg) => AppError::Internal(msg),
            AuthError::Malformed(_) | AuthError::BadSignature | AuthError::Expired => {
                AppError::Unauthenticated
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn domain_errors_map_to_their_status_codes() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                DomainError::Validation(vec!["too short".into()]).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::Unauthenticated.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (DomainError::Unauthorized.into(), StatusCode::FORBIDDEN),
            (
                DomainError::not_found("post", Uuid::new_v4()).into(),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn repo_errors_surface_as_conflict_not_found_or_internal() {
        assert_eq!(
            AppError::from(RepoError::Constraint("email already registered".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(RepoError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(RepoError::Query("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(RepoError::Connection("refused".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_detail_names_the_entity() {
        let id = Uuid::new_v4();
        let err = AppError::from(DomainError::not_found("user", id));
        assert!(matches!(&err, AppError::NotFound(d) if d.contains("user") && d.contains(&id.to_string())));
    }
}

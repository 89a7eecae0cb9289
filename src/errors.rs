use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level error taxonomy. Every failure a handler can surface maps
/// onto one of these; `ResponseError` turns them into a status code plus a
/// JSON notice body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("username already exists, please choose a different one")]
    DuplicateUsername,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("account has been banned, please contact support")]
    AccountBanned,
    #[error("please log in")]
    Unauthorized,
    #[error("you don't have permission to do that")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("storage error")]
    Storage(#[from] diesel::result::Error),
    #[error("internal error")]
    Internal(&'static str),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateUsername => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::AccountBanned | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage failures get logged and answered with a generic notice;
        // the diesel detail never reaches the caller.
        let notice = match self {
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                "an error occurred, please try again".to_string()
            }
            AppError::Internal(what) => {
                tracing::error!(what, "internal failure");
                "an error occurred, please try again".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "notice": notice }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(
            AppError::validation("missing field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::DuplicateUsername.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::AccountBanned.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound("song").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Storage(diesel::result::Error::RollbackTransaction).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_notice_is_generic() {
        let resp = AppError::Storage(diesel::result::Error::RollbackTransaction).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

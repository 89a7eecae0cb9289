use actix_web::{HttpMessage, HttpRequest};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::AppError;
use crate::models::session_models::CurrentUser;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(|_| AppError::Internal("failed to hash password"))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

/// The caller the session middleware resolved for this request, if any.
pub fn current_user(req: &HttpRequest) -> Option<CurrentUser> {
    req.extensions().get::<CurrentUser>().cloned()
}

pub fn require_user(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    current_user(req).ok_or(AppError::Unauthorized)
}

pub fn require_creator(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let user = require_user(req)?;
    if !user.is_creator {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

pub fn require_admin(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let user = require_user(req)?;
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

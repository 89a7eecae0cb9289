use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::store::{albums, songs, users};
use crate::utils::auth_utils::require_user;

/// The listener's home view: the whole catalog plus whether the creator
/// upsell still applies.
pub async fn user_dashboard(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    let songs = songs::list_all(&mut conn)?;
    let albums = albums::list_all(&mut conn)?;
    Ok(HttpResponse::Ok().json(json!({
        "username": user.username,
        "is_creator": user.is_creator,
        "songs": songs,
        "albums": albums,
    })))
}

pub async fn join_as_creator(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    users::promote_to_creator(&mut conn, user.id)?;
    tracing::info!(username = %user.username, "joined as creator");
    Ok(HttpResponse::Ok().json(json!({
        "notice": "congratulations, you've joined the platform as a creator",
    })))
}

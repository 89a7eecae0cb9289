use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::store::{albums, songs, users};
use crate::utils::auth_utils::require_admin;

pub async fn admin_dashboard(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    let counts = users::dashboard_counts(&mut conn)?;
    Ok(HttpResponse::Ok().json(counts))
}

pub async fn user_list(req: HttpRequest, pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(users::list(&mut conn)?))
}

pub async fn song_list(req: HttpRequest, pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(songs::list_all(&mut conn)?))
}

pub async fn album_list(req: HttpRequest, pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(albums::list_all(&mut conn)?))
}

pub async fn ban_user(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let admin = require_admin(&req)?;
    let user_id = path.into_inner();
    let mut conn = get_conn(&pool)?;
    users::ban(&mut conn, user_id)?;
    tracing::info!(banned_user_id = user_id, by = %admin.username, "user banned");
    Ok(HttpResponse::Ok().json(json!({ "notice": "user banned successfully" })))
}

pub async fn admin_delete_song(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    songs::admin_delete(&mut conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "song deleted successfully" })))
}

pub async fn admin_delete_album(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require_admin(&req)?;
    let mut conn = get_conn(&pool)?;
    albums::admin_delete(&mut conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "album deleted successfully" })))
}

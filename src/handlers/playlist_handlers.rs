use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::playlist_models::{AddSongsRequest, PlaylistRequest};
use crate::store::{playlists, songs};
use crate::utils::auth_utils::require_user;

/// The create form offers the whole catalog, not just the caller's songs.
pub async fn create_playlist_form(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(json!({ "songs": songs::list_all(&mut conn)? })))
}

pub async fn create_playlist(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    payload: web::Json<PlaylistRequest>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    let playlist = playlists::create(&mut conn, user.id, &payload.name, &payload.song_ids)?;
    Ok(HttpResponse::Created().json(json!({
        "id": playlist.id,
        "name": playlist.name,
        "notice": "playlist created successfully",
    })))
}

pub async fn playlist_list(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(playlists::list_for_user(&mut conn, user.id)?))
}

pub async fn delete_playlist(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    playlists::delete(&mut conn, user.id, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "playlist deleted successfully" })))
}

pub async fn playlist_songs(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(playlists::songs_of(&mut conn, user.id, path.into_inner())?))
}

pub async fn add_songs_form(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    Ok(HttpResponse::Ok().json(json!({
        "songs": playlists::addable_songs(&mut conn, path.into_inner())?,
    })))
}

pub async fn add_songs(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<AddSongsRequest>,
) -> Result<HttpResponse, AppError> {
    require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    let added = playlists::add_songs(&mut conn, path.into_inner(), &payload.song_ids)?;
    Ok(HttpResponse::Ok().json(json!({
        "added": added,
        "notice": "songs added to the playlist successfully",
    })))
}

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::album_models::AlbumRequest;
use crate::models::song_models::{ModifySongRequest, UploadSongForm};
use crate::store::{albums, songs};
use crate::utils::auth_utils::{require_creator, require_user};

pub async fn creator_dashboard(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    let songs = songs::list_by_artist(&mut conn, creator.id)?;
    let albums = albums::list_by_artist(&mut conn, creator.id)?;
    Ok(HttpResponse::Ok().json(json!({
        "username": creator.username,
        "songs": songs,
        "albums": albums,
    })))
}

async fn read_upload_form(mut payload: Multipart) -> Result<UploadSongForm, AppError> {
    let mut form = UploadSongForm::default();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let name = match field.content_disposition().and_then(|cd| cd.get_name()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let mut bytes = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|_| AppError::validation("malformed upload"))?;
            bytes.extend_from_slice(&data);
        }

        match name.as_str() {
            "title" => {
                form.title = Some(
                    String::from_utf8(bytes.to_vec())
                        .map_err(|_| AppError::validation("title must be text"))?,
                )
            }
            "lyrics" => {
                form.lyrics = Some(
                    String::from_utf8(bytes.to_vec())
                        .map_err(|_| AppError::validation("lyrics must be text"))?,
                )
            }
            // An empty file input still posts a zero-length part.
            "audio" => {
                if !bytes.is_empty() {
                    form.audio = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

pub async fn upload_song(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let form = read_upload_form(payload).await?;
    let title = form
        .title
        .ok_or_else(|| AppError::validation("title is required"))?;
    let lyrics = form
        .lyrics
        .ok_or_else(|| AppError::validation("lyrics are required"))?;

    let mut conn = get_conn(&pool)?;
    let song = songs::upload(&mut conn, &creator, &title, &lyrics, form.audio)?;
    tracing::info!(song_id = song.id, artist = %creator.username, "song uploaded");
    Ok(HttpResponse::Created().json(json!({
        "id": song.id,
        "title": song.title,
        "notice": "song uploaded successfully",
    })))
}

pub async fn modify_song_form(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    let song = songs::find_owned(&mut conn, &creator, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "id": song.id,
        "title": song.title,
        "lyrics": song.lyrics,
    })))
}

pub async fn modify_song(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    form: web::Form<ModifySongRequest>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    songs::modify(&mut conn, &creator, path.into_inner(), &form.title, &form.lyrics)?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "song updated successfully" })))
}

pub async fn delete_song(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let actor = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    songs::delete(&mut conn, &actor, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "song deleted successfully" })))
}

pub async fn create_album_form(
    req: HttpRequest,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    let choices = songs::list_by_artist(&mut conn, creator.id)?;
    Ok(HttpResponse::Ok().json(json!({ "songs": choices })))
}

pub async fn create_album(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    payload: web::Json<AlbumRequest>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    let album = albums::create(&mut conn, &creator, &payload.name, &payload.song_ids)?;
    tracing::info!(album_id = album.id, artist = %creator.username, "album created");
    Ok(HttpResponse::Created().json(json!({
        "id": album.id,
        "name": album.name,
        "notice": "album created successfully",
    })))
}

pub async fn modify_album_form(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    let album = albums::find(&mut conn, path.into_inner())?;
    if album.artist_id != creator.id {
        return Err(AppError::Forbidden);
    }
    let member_ids = albums::member_song_ids(&mut conn, album.id)?;
    let choices = songs::list_by_artist(&mut conn, creator.id)?;
    Ok(HttpResponse::Ok().json(json!({
        "id": album.id,
        "name": album.name,
        "song_ids": member_ids,
        "songs": choices,
    })))
}

pub async fn modify_album(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<AlbumRequest>,
) -> Result<HttpResponse, AppError> {
    let creator = require_creator(&req)?;
    let mut conn = get_conn(&pool)?;
    albums::modify(
        &mut conn,
        &creator,
        path.into_inner(),
        &payload.name,
        &payload.song_ids,
    )?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "album updated successfully" })))
}

pub async fn delete_album(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let actor = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    albums::delete(&mut conn, &actor, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "album deleted successfully" })))
}

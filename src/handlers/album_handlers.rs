use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::store::albums;

pub async fn album_songs(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();
    let mut conn = get_conn(&pool)?;
    let album = albums::find(&mut conn, album_id)?;
    let songs = albums::songs_of(&mut conn, album_id)?;
    Ok(HttpResponse::Ok().json(json!({
        "id": album.id,
        "name": album.name,
        "songs": songs,
    })))
}

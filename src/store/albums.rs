use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::album_models::{Album, AlbumSummary, NewAlbum, NewAlbumSong};
use crate::models::session_models::CurrentUser;
use crate::models::song_models::SongSummary;
use crate::schema::{album_songs, albums, songs, users};

fn dedup(song_ids: &[i32]) -> Vec<i32> {
    let mut ids = song_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Every song attached to an album must belong to the acting creator.
fn assert_owns_songs(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    song_ids: &[i32],
) -> Result<(), AppError> {
    if song_ids.is_empty() {
        return Ok(());
    }
    let owned: i64 = songs::table
        .filter(songs::id.eq_any(song_ids))
        .filter(songs::artist_id.eq(actor.id))
        .count()
        .get_result(conn)?;
    if owned != song_ids.len() as i64 {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

fn attach(
    conn: &mut SqliteConnection,
    album_id_param: i32,
    song_ids: &[i32],
) -> Result<(), AppError> {
    let rows: Vec<NewAlbumSong> = song_ids
        .iter()
        .map(|&song_id| NewAlbumSong {
            album_id: album_id_param,
            song_id,
        })
        .collect();
    if !rows.is_empty() {
        diesel::insert_into(album_songs::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

pub fn create(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    name_param: &str,
    song_ids: &[i32],
) -> Result<Album, AppError> {
    if !actor.is_creator {
        return Err(AppError::Forbidden);
    }
    let name_param = name_param.trim();
    if name_param.is_empty() {
        return Err(AppError::validation("album name is required"));
    }
    let ids = dedup(song_ids);

    conn.transaction::<_, AppError, _>(|conn| {
        assert_owns_songs(conn, actor, &ids)?;
        let album: Album = diesel::insert_into(albums::table)
            .values(&NewAlbum {
                name: name_param.to_string(),
                artist_id: actor.id,
            })
            .get_result(conn)?;
        attach(conn, album.id, &ids)?;
        Ok(album)
    })
}

/// Replaces the song set wholesale: clear, then re-add whatever the form
/// posted.
pub fn modify(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    album_id_param: i32,
    name_param: &str,
    song_ids: &[i32],
) -> Result<(), AppError> {
    let name_param = name_param.trim();
    if name_param.is_empty() {
        return Err(AppError::validation("album name is required"));
    }
    let ids = dedup(song_ids);

    conn.transaction::<_, AppError, _>(|conn| {
        let album = find(conn, album_id_param)?;
        if !actor.is_creator || album.artist_id != actor.id {
            return Err(AppError::Forbidden);
        }
        assert_owns_songs(conn, actor, &ids)?;

        diesel::update(albums::table.find(album.id))
            .set(albums::name.eq(name_param))
            .execute(conn)?;
        diesel::delete(album_songs::table.filter(album_songs::album_id.eq(album.id)))
            .execute(conn)?;
        attach(conn, album.id, &ids)?;
        Ok(())
    })
}

pub fn delete(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    album_id_param: i32,
) -> Result<(), AppError> {
    conn.transaction::<_, AppError, _>(|conn| {
        let album = find(conn, album_id_param)?;
        let owns = actor.is_creator && album.artist_id == actor.id;
        if !owns && !actor.is_admin {
            return Err(AppError::Forbidden);
        }
        diesel::delete(albums::table.find(album.id)).execute(conn)?;
        Ok(())
    })
}

/// Moderation path: no ownership check at all.
pub fn admin_delete(conn: &mut SqliteConnection, album_id_param: i32) -> Result<(), AppError> {
    let affected = diesel::delete(albums::table.find(album_id_param)).execute(conn)?;
    if affected == 0 {
        return Err(AppError::NotFound("album"));
    }
    Ok(())
}

pub fn find(conn: &mut SqliteConnection, album_id_param: i32) -> Result<Album, AppError> {
    albums::table
        .find(album_id_param)
        .select(Album::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("album"))
}

pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<AlbumSummary>, AppError> {
    Ok(albums::table
        .inner_join(users::table)
        .select((albums::id, albums::name, users::username))
        .order(albums::id.asc())
        .load(conn)?)
}

pub fn list_by_artist(
    conn: &mut SqliteConnection,
    artist_id_param: i32,
) -> Result<Vec<AlbumSummary>, AppError> {
    Ok(albums::table
        .inner_join(users::table)
        .filter(albums::artist_id.eq(artist_id_param))
        .select((albums::id, albums::name, users::username))
        .order(albums::id.asc())
        .load(conn)?)
}

/// Ids of the songs currently on the album, for prefilling the edit form.
pub fn member_song_ids(
    conn: &mut SqliteConnection,
    album_id_param: i32,
) -> Result<Vec<i32>, AppError> {
    Ok(album_songs::table
        .filter(album_songs::album_id.eq(album_id_param))
        .select(album_songs::song_id)
        .order(album_songs::song_id.asc())
        .load(conn)?)
}

pub fn songs_of(
    conn: &mut SqliteConnection,
    album_id_param: i32,
) -> Result<Vec<SongSummary>, AppError> {
    let album = find(conn, album_id_param)?;
    Ok(album_songs::table
        .inner_join(songs::table.inner_join(users::table))
        .filter(album_songs::album_id.eq(album.id))
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?)
}

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::playlist_models::{NewPlaylist, NewPlaylistSong, Playlist};
use crate::models::song_models::SongSummary;
use crate::schema::{playlist_songs, playlists, songs, users};

fn dedup(song_ids: &[i32]) -> Vec<i32> {
    let mut ids = song_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Playlists draw from the whole catalog; ids that don't resolve to a
/// song are dropped silently.
fn existing_song_ids(
    conn: &mut SqliteConnection,
    song_ids: &[i32],
) -> Result<Vec<i32>, AppError> {
    if song_ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(songs::table
        .filter(songs::id.eq_any(song_ids))
        .select(songs::id)
        .load(conn)?)
}

pub fn create(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    name_param: &str,
    song_ids: &[i32],
) -> Result<Playlist, AppError> {
    let name_param = name_param.trim();
    if name_param.is_empty() {
        return Err(AppError::validation("playlist name is required"));
    }
    let ids = dedup(song_ids);

    conn.transaction::<_, AppError, _>(|conn| {
        let playlist: Playlist = diesel::insert_into(playlists::table)
            .values(&NewPlaylist {
                name: name_param.to_string(),
                user_id: user_id_param,
            })
            .get_result(conn)?;

        let rows: Vec<NewPlaylistSong> = existing_song_ids(conn, &ids)?
            .into_iter()
            .map(|song_id| NewPlaylistSong {
                playlist_id: playlist.id,
                song_id,
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(playlist_songs::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(playlist)
    })
}

pub fn list_for_user(
    conn: &mut SqliteConnection,
    user_id_param: i32,
) -> Result<Vec<Playlist>, AppError> {
    Ok(playlists::table
        .filter(playlists::user_id.eq(user_id_param))
        .select(Playlist::as_select())
        .order(playlists::id.asc())
        .load(conn)?)
}

fn find(conn: &mut SqliteConnection, playlist_id_param: i32) -> Result<Playlist, AppError> {
    playlists::table
        .find(playlist_id_param)
        .select(Playlist::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("playlist"))
}

fn find_owned(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    playlist_id_param: i32,
) -> Result<Playlist, AppError> {
    let playlist = find(conn, playlist_id_param)?;
    if playlist.user_id != user_id_param {
        return Err(AppError::Forbidden);
    }
    Ok(playlist)
}

pub fn delete(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    playlist_id_param: i32,
) -> Result<(), AppError> {
    let playlist = find_owned(conn, user_id_param, playlist_id_param)?;
    diesel::delete(playlists::table.find(playlist.id)).execute(conn)?;
    Ok(())
}

pub fn songs_of(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    playlist_id_param: i32,
) -> Result<Vec<SongSummary>, AppError> {
    let playlist = find_owned(conn, user_id_param, playlist_id_param)?;
    Ok(playlist_songs::table
        .inner_join(songs::table.inner_join(users::table))
        .filter(playlist_songs::playlist_id.eq(playlist.id))
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?)
}

/// Catalog songs not yet on the playlist: the only ones the add form may
/// offer. Deliberately no owner check, same as `add_songs`.
pub fn addable_songs(
    conn: &mut SqliteConnection,
    playlist_id_param: i32,
) -> Result<Vec<SongSummary>, AppError> {
    let playlist = find(conn, playlist_id_param)?;
    let member_ids = playlist_songs::table
        .filter(playlist_songs::playlist_id.eq(playlist.id))
        .select(playlist_songs::song_id);
    Ok(songs::table
        .inner_join(users::table)
        .filter(songs::id.ne_all(member_ids))
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?)
}

/// Append the chosen subset, skipping songs already present. Any
/// signed-in caller can append to any playlist by id; only deletion and
/// listing are owner-scoped.
pub fn add_songs(
    conn: &mut SqliteConnection,
    playlist_id_param: i32,
    song_ids: &[i32],
) -> Result<usize, AppError> {
    let ids = dedup(song_ids);

    conn.transaction::<_, AppError, _>(|conn| {
        let playlist = find(conn, playlist_id_param)?;
        let present: Vec<i32> = playlist_songs::table
            .filter(playlist_songs::playlist_id.eq(playlist.id))
            .select(playlist_songs::song_id)
            .load(conn)?;

        let rows: Vec<NewPlaylistSong> = existing_song_ids(conn, &ids)?
            .into_iter()
            .filter(|song_id| !present.contains(song_id))
            .map(|song_id| NewPlaylistSong {
                playlist_id: playlist.id,
                song_id,
            })
            .collect();

        let added = rows.len();
        if !rows.is_empty() {
            diesel::insert_into(playlist_songs::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(added)
    })
}

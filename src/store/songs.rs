use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::session_models::CurrentUser;
use crate::models::song_models::{NewSong, Song, SongDetail, SongSummary};
use crate::schema::{ratings, songs, users};
use crate::store::ratings as ratings_store;

pub fn upload(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    title_param: &str,
    lyrics_param: &str,
    audio_param: Option<Vec<u8>>,
) -> Result<Song, AppError> {
    if !actor.is_creator {
        return Err(AppError::Forbidden);
    }
    let title_param = title_param.trim();
    let lyrics_param = lyrics_param.trim();
    if title_param.is_empty() || lyrics_param.is_empty() {
        return Err(AppError::validation("title and lyrics are required"));
    }

    let new_song = NewSong {
        title: title_param.to_string(),
        artist_id: actor.id,
        lyrics: lyrics_param.to_string(),
        audio: audio_param,
    };
    Ok(diesel::insert_into(songs::table)
        .values(&new_song)
        .get_result(conn)?)
}

pub fn find(conn: &mut SqliteConnection, song_id_param: i32) -> Result<Song, AppError> {
    songs::table
        .find(song_id_param)
        .select(Song::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("song"))
}

/// Fetch a song the actor is allowed to edit: missing id beats a
/// permission mismatch, so callers see NotFound before Forbidden.
pub fn find_owned(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    song_id_param: i32,
) -> Result<Song, AppError> {
    let song = find(conn, song_id_param)?;
    if !actor.is_creator || song.artist_id != actor.id {
        return Err(AppError::Forbidden);
    }
    Ok(song)
}

pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<SongSummary>, AppError> {
    Ok(songs::table
        .inner_join(users::table)
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?)
}

pub fn list_by_artist(
    conn: &mut SqliteConnection,
    artist_id_param: i32,
) -> Result<Vec<SongSummary>, AppError> {
    Ok(songs::table
        .inner_join(users::table)
        .filter(songs::artist_id.eq(artist_id_param))
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?)
}

/// Title and lyrics are the only mutable fields; artist and audio are
/// fixed at upload.
pub fn modify(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    song_id_param: i32,
    title_param: &str,
    lyrics_param: &str,
) -> Result<(), AppError> {
    let song = find_owned(conn, actor, song_id_param)?;
    let title_param = title_param.trim();
    let lyrics_param = lyrics_param.trim();
    if title_param.is_empty() || lyrics_param.is_empty() {
        return Err(AppError::validation("title and lyrics are required"));
    }
    diesel::update(songs::table.find(song.id))
        .set((songs::title.eq(title_param), songs::lyrics.eq(lyrics_param)))
        .execute(conn)?;
    Ok(())
}

/// Owner-creator or admin. Ratings and album/playlist memberships go
/// with the song.
pub fn delete(
    conn: &mut SqliteConnection,
    actor: &CurrentUser,
    song_id_param: i32,
) -> Result<(), AppError> {
    conn.transaction::<_, AppError, _>(|conn| {
        let song = find(conn, song_id_param)?;
        let owns = actor.is_creator && song.artist_id == actor.id;
        if !owns && !actor.is_admin {
            return Err(AppError::Forbidden);
        }
        diesel::delete(songs::table.find(song.id)).execute(conn)?;
        Ok(())
    })
}

/// Moderation path: no ownership check at all.
pub fn admin_delete(conn: &mut SqliteConnection, song_id_param: i32) -> Result<(), AppError> {
    let affected = diesel::delete(songs::table.find(song_id_param)).execute(conn)?;
    if affected == 0 {
        return Err(AppError::NotFound("song"));
    }
    Ok(())
}

/// Arithmetic mean over all ratings, 0.0 when the song has none.
pub fn average_rating(conn: &mut SqliteConnection, song_id_param: i32) -> Result<f64, AppError> {
    let values: Vec<i32> = ratings::table
        .filter(ratings::song_id.eq(song_id_param))
        .select(ratings::rating)
        .load(conn)?;
    if values.is_empty() {
        return Ok(0.0);
    }
    Ok(values.iter().sum::<i32>() as f64 / values.len() as f64)
}

/// Everything the song page renders, including whether the viewer has
/// already rated it (false for anonymous viewers).
pub fn detail(
    conn: &mut SqliteConnection,
    song_id_param: i32,
    viewer: Option<&CurrentUser>,
) -> Result<SongDetail, AppError> {
    let (song, artist) = songs::table
        .inner_join(users::table)
        .filter(songs::id.eq(song_id_param))
        .select((Song::as_select(), users::username))
        .first::<(Song, String)>(conn)
        .optional()?
        .ok_or(AppError::NotFound("song"))?;

    let average_rating = average_rating(conn, song.id)?;
    let has_rated = match viewer {
        Some(user) => ratings_store::has_rated(conn, user.id, song.id)?,
        None => false,
    };

    Ok(SongDetail {
        id: song.id,
        title: song.title,
        artist,
        lyrics: song.lyrics,
        has_audio: song.audio.is_some(),
        average_rating,
        has_rated,
    })
}

pub fn audio(
    conn: &mut SqliteConnection,
    song_id_param: i32,
) -> Result<(String, Option<Vec<u8>>), AppError> {
    songs::table
        .find(song_id_param)
        .select((songs::title, songs::audio))
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("song"))
}

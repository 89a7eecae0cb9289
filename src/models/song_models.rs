use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::songs)]
pub struct Song {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub lyrics: String,
    pub audio: Option<Vec<u8>>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::songs)]
pub struct NewSong {
    pub title: String,
    pub artist_id: i32,
    pub lyrics: String,
    pub audio: Option<Vec<u8>>,
}

/// Catalog listing row: song plus the owning creator's username. Kept
/// free of lyrics and audio so listings stay light.
#[derive(Queryable, Serialize, Debug)]
pub struct SongSummary {
    pub id: i32,
    pub title: String,
    pub artist: String,
}

/// Fields accepted when a creator edits an existing song. Artist and
/// audio are immutable after upload.
#[derive(Deserialize)]
pub struct ModifySongRequest {
    pub title: String,
    pub lyrics: String,
}

/// The song detail view: everything `/song/{id}` renders.
#[derive(Serialize)]
pub struct SongDetail {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    pub has_audio: bool,
    pub average_rating: f64,
    pub has_rated: bool,
}

/// Song-upload form after multipart parsing, before validation.
#[derive(Default)]
pub struct UploadSongForm {
    pub title: Option<String>,
    pub lyrics: Option<String>,
    pub audio: Option<Vec<u8>>,
}

use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::albums)]
pub struct Album {
    pub id: i32,
    pub name: String,
    pub artist_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::albums)]
pub struct NewAlbum {
    pub name: String,
    pub artist_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::album_songs)]
pub struct NewAlbumSong {
    pub album_id: i32,
    pub song_id: i32,
}

/// Create and modify share one shape: modify replaces the song set
/// wholesale with whatever the form posted.
#[derive(Deserialize)]
pub struct AlbumRequest {
    pub name: String,
    #[serde(default)]
    pub song_ids: Vec<i32>,
}

#[derive(Queryable, Serialize, Debug)]
pub struct AlbumSummary {
    pub id: i32,
    pub name: String,
    pub artist: String,
}

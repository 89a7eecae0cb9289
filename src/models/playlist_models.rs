use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Debug)]
#[diesel(table_name = crate::schema::playlists)]
pub struct Playlist {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::playlists)]
pub struct NewPlaylist {
    pub name: String,
    pub user_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::playlist_songs)]
pub struct NewPlaylistSong {
    pub playlist_id: i32,
    pub song_id: i32,
}

#[derive(Deserialize)]
pub struct PlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub song_ids: Vec<i32>,
}

#[derive(Deserialize)]
pub struct AddSongsRequest {
    pub song_ids: Vec<i32>,
}

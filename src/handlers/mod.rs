pub mod admin_handlers;
pub mod album_handlers;
pub mod auth_handlers;
pub mod creator_handlers;
pub mod playlist_handlers;
pub mod search_handlers;
pub mod song_handlers;
pub mod user_handlers;

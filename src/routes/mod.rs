pub mod admin_routes;
pub mod album_routes;
pub mod auth_routes;
pub mod creator_routes;
pub mod playlist_routes;
pub mod search_routes;
pub mod song_routes;
pub mod user_routes;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    auth_routes::configure(cfg);
    user_routes::configure(cfg);
    creator_routes::configure(cfg);
    admin_routes::configure(cfg);
    song_routes::configure(cfg);
    playlist_routes::configure(cfg);
    album_routes::configure(cfg);
    search_routes::configure(cfg);
}

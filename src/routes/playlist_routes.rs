use actix_web::web;

use crate::handlers::playlist_handlers::{
    add_songs, add_songs_form, create_playlist, create_playlist_form, delete_playlist,
    playlist_list, playlist_songs,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/dashboard/user/create_playlist")
            .route(web::get().to(create_playlist_form))
            .route(web::post().to(create_playlist)),
    )
    .route("/playlist_list", web::get().to(playlist_list))
    .route("/delete_playlist/{playlist_id}", web::get().to(delete_playlist))
    .route("/playlist/{playlist_id}/songs", web::get().to(playlist_songs))
    .service(
        web::resource("/playlist/{playlist_id}/add_songs")
            .route(web::get().to(add_songs_form))
            .route(web::post().to(add_songs)),
    );
}

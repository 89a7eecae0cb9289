use actix_web::web;

use crate::handlers::creator_handlers::{
    create_album, create_album_form, creator_dashboard, delete_album, delete_song, modify_album,
    modify_album_form, modify_song, modify_song_form, upload_song,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard/creator")
            .route("", web::get().to(creator_dashboard))
            .route("", web::post().to(upload_song))
            .route("/modify/{song_id}", web::get().to(modify_song_form))
            .route("/modify/{song_id}", web::post().to(modify_song))
            .route("/delete/{song_id}", web::get().to(delete_song))
            .route("/create_album", web::get().to(create_album_form))
            .route("/create_album", web::post().to(create_album))
            .route("/modify_album/{album_id}", web::get().to(modify_album_form))
            .route("/modify_album/{album_id}", web::post().to(modify_album))
            .route("/delete_album/{album_id}", web::get().to(delete_album)),
    );
}

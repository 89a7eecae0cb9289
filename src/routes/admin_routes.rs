use actix_web::web;

use crate::handlers::admin_handlers::{
    admin_dashboard, admin_delete_album, admin_delete_song, album_list, ban_user, song_list,
    user_list,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard/admin")
            .route("", web::get().to(admin_dashboard))
            .route("", web::post().to(admin_dashboard))
            .route("/delete/{song_id}", web::get().to(admin_delete_song))
            .route("/delete_album/{album_id}", web::get().to(admin_delete_album)),
    )
    .route("/user_list", web::get().to(user_list))
    .route("/song_list", web::get().to(song_list))
    .route("/album_list", web::get().to(album_list))
    .route("/ban_user/{user_id}", web::post().to(ban_user));
}

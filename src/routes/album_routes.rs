use actix_web::web;

use crate::handlers::album_handlers::album_songs;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/album/{album_id}/songs", web::get().to(album_songs));
}

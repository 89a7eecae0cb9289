use actix_web::web;

use crate::handlers::song_handlers::{get_mp3, rate_song, song_details};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/song/{song_id}", web::get().to(song_details))
        .route("/get_mp3/{song_id}", web::get().to(get_mp3))
        .route("/rate_song/{song_id}", web::post().to(rate_song));
}

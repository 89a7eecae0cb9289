use actix_web::web;

use crate::handlers::search_handlers::search;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::post().to(search));
}

use actix_web::web;

use crate::handlers::user_handlers::{join_as_creator, user_dashboard};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/dashboard/user")
            .route(web::get().to(user_dashboard))
            .route(web::post().to(join_as_creator)),
    );
}

use actix_web::web;

use crate::handlers::auth_handlers::{login_admin, login_user, logout, register};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login/user", web::post().to(login_user))
        .route("/login/admin", web::post().to(login_admin))
        .route("/logout", web::post().to(logout));
}

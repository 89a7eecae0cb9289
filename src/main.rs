mod constants;
mod db;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod schema;
mod store;
mod utils;

use actix_web::{web, App, HttpRequest, HttpServer, Responder};
use tracing_subscriber::EnvFilter;

#[actix_web::get("/")]
async fn index(_req: HttpRequest) -> impl Responder {
    format!("Welcome to Refrain!")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // Setup DB pool from DATABASE_URL env
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "refrain.db".to_string());
    let pool = db::build_pool(&database_url).expect("Failed to create DB pool");

    {
        let mut conn = pool.get().expect("Failed to check out a connection");
        db::run_migrations(&mut conn).expect("Failed to run migrations");
    }

    tracing::info!(port, %database_url, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::session_middleware::SessionAuth)
            .service(index)
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

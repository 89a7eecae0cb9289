use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::store::search as search_store;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub search_query: Option<String>,
}

pub async fn search(
    pool: web::Data<DbPool>,
    form: web::Form<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let query = form.search_query.clone().unwrap_or_default();
    let mut conn = get_conn(&pool)?;
    let (songs, albums) = search_store::search(&mut conn, &query)?;
    Ok(HttpResponse::Ok().json(json!({
        "songs": songs,
        "albums": albums,
    })))
}

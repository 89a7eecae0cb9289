use diesel::prelude::{Insertable, Queryable};
use serde::Deserialize;

#[allow(dead_code)]
#[derive(Queryable, Debug)]
pub struct Rating {
    pub id: i32,
    pub user_id: i32,
    pub song_id: i32,
    pub rating: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ratings)]
pub struct NewRating {
    pub user_id: i32,
    pub song_id: i32,
    pub rating: i32,
}

#[derive(Deserialize)]
pub struct RateRequest {
    pub rating: i32,
}

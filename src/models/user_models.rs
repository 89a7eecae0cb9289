use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_creator: bool,
    pub is_banned: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account row as the admin user list renders it; the hash never leaves
/// the server.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
    pub is_creator: bool,
    pub is_banned: bool,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            is_admin: u.is_admin,
            is_creator: u.is_creator,
            is_banned: u.is_banned,
            created_at: u.created_at,
        }
    }
}

/// Aggregate counts shown on the admin dashboard, recomputed per view.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_users: i64,
    pub total_creators: i64,
    pub total_songs: i64,
    pub total_albums: i64,
}

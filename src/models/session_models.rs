use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Serialize;

use crate::models::user_models::User;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::schema::sessions)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession {
    pub user_id: i32,
    pub token: String,
    pub expires_at: NaiveDateTime,
}

/// Authenticated caller, resolved from the session cookie on every
/// request. Role flags are read fresh from the user row each time and
/// never cached across requests.
#[derive(Clone, Serialize, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
    pub is_creator: bool,
    pub is_banned: bool,
}

impl From<User> for CurrentUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            is_admin: u.is_admin,
            is_creator: u.is_creator,
            is_banned: u.is_banned,
        }
    }
}

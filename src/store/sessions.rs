use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::session_models::{CurrentUser, NewSession, Session};
use crate::models::user_models::User;
use crate::schema::{sessions, users};
use crate::utils::token_utils::generate_session_token;

const SESSION_LIFETIME_HOURS: i64 = 720; // 30 days

pub fn create(conn: &mut SqliteConnection, user_id_param: i32) -> Result<Session, AppError> {
    let new_session = NewSession {
        user_id: user_id_param,
        token: generate_session_token(),
        expires_at: (Utc::now() + Duration::hours(SESSION_LIFETIME_HOURS)).naive_utc(),
    };
    Ok(diesel::insert_into(sessions::table)
        .values(&new_session)
        .get_result(conn)?)
}

/// Resolve a cookie token into the caller it belongs to. Role flags come
/// straight off the user row, so a promotion or ban is visible on the
/// very next request.
pub fn resolve(
    conn: &mut SqliteConnection,
    token_param: &str,
) -> Result<Option<CurrentUser>, AppError> {
    let now = Utc::now().naive_utc();
    let user = sessions::table
        .inner_join(users::table)
        .filter(sessions::token.eq(token_param))
        .filter(sessions::expires_at.gt(now))
        .select(User::as_select())
        .first(conn)
        .optional()?;
    Ok(user.map(CurrentUser::from))
}

pub fn delete_by_token(conn: &mut SqliteConnection, token_param: &str) -> Result<(), AppError> {
    diesel::delete(sessions::table.filter(sessions::token.eq(token_param))).execute(conn)?;
    Ok(())
}

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::user_models::{DashboardCounts, NewUser, User, UserResponse};
use crate::schema::{albums, songs, users};
use crate::utils::auth_utils;

pub fn register(
    conn: &mut SqliteConnection,
    username_param: &str,
    password: &str,
) -> Result<User, AppError> {
    let username_param = username_param.trim();
    if username_param.is_empty() || password.is_empty() {
        return Err(AppError::validation("username and password are required"));
    }

    let existing = users::table
        .filter(users::username.eq(username_param))
        .select(User::as_select())
        .first(conn)
        .optional()?;
    if existing.is_some() {
        return Err(AppError::DuplicateUsername);
    }

    let new_user = NewUser {
        username: username_param.to_string(),
        password_hash: auth_utils::hash_password(password)?,
        is_admin: false,
    };

    diesel::insert_into(users::table)
        .values(&new_user)
        .get_result(conn)
        .map_err(|e| match e {
            // Two concurrent registrations can both pass the lookup above;
            // the UNIQUE constraint decides the loser.
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::DuplicateUsername
            }
            other => other.into(),
        })
}

/// Role-scoped login: the user form only matches non-admin rows, the
/// admin form only admin rows. A banned account fails before password
/// verification.
pub fn login(
    conn: &mut SqliteConnection,
    username_param: &str,
    password: &str,
    admin_login: bool,
) -> Result<User, AppError> {
    let user = users::table
        .filter(users::username.eq(username_param))
        .filter(users::is_admin.eq(admin_login))
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::InvalidCredentials)?;

    if !admin_login && user.is_banned {
        return Err(AppError::AccountBanned);
    }
    if !auth_utils::verify_password(password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }
    Ok(user)
}

pub fn find(conn: &mut SqliteConnection, user_id_param: i32) -> Result<User, AppError> {
    users::table
        .find(user_id_param)
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or(AppError::NotFound("user"))
}

/// Idempotent: promoting an existing creator again changes nothing.
pub fn promote_to_creator(conn: &mut SqliteConnection, user_id_param: i32) -> Result<(), AppError> {
    let affected = diesel::update(users::table.find(user_id_param))
        .set(users::is_creator.eq(true))
        .execute(conn)?;
    if affected == 0 {
        return Err(AppError::NotFound("user"));
    }
    Ok(())
}

/// Ban an account. For creators this cascades into their whole catalog:
/// songs and albums go, and the schema's FK rules take ratings and
/// album/playlist memberships with them.
pub fn ban(conn: &mut SqliteConnection, user_id_param: i32) -> Result<(), AppError> {
    conn.transaction::<_, AppError, _>(|conn| {
        let target = find(conn, user_id_param)?;

        diesel::update(users::table.find(target.id))
            .set(users::is_banned.eq(true))
            .execute(conn)?;

        if target.is_creator {
            diesel::delete(songs::table.filter(songs::artist_id.eq(target.id))).execute(conn)?;
            diesel::delete(albums::table.filter(albums::artist_id.eq(target.id))).execute(conn)?;
        }
        Ok(())
    })
}

pub fn list(conn: &mut SqliteConnection) -> Result<Vec<UserResponse>, AppError> {
    let rows = users::table
        .select(User::as_select())
        .order(users::id.asc())
        .load::<User>(conn)?;
    Ok(rows.into_iter().map(UserResponse::from).collect())
}

pub fn dashboard_counts(conn: &mut SqliteConnection) -> Result<DashboardCounts, AppError> {
    let total_users = users::table
        .filter(users::is_admin.eq(false))
        .filter(users::is_banned.eq(false))
        .count()
        .get_result(conn)?;
    let total_creators = users::table
        .filter(users::is_creator.eq(true))
        .filter(users::is_banned.eq(false))
        .count()
        .get_result(conn)?;
    let total_songs = songs::table.count().get_result(conn)?;
    let total_albums = albums::table.count().get_result(conn)?;

    Ok(DashboardCounts {
        total_users,
        total_creators,
        total_songs,
        total_albums,
    })
}

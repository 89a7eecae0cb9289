pub mod albums;
pub mod playlists;
pub mod ratings;
pub mod search;
pub mod sessions;
pub mod songs;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use diesel::prelude::*;
    use diesel::SqliteConnection;

    use crate::models::session_models::CurrentUser;
    use crate::models::song_models::Song;
    use crate::schema::users;

    pub fn listener(conn: &mut SqliteConnection, name: &str) -> CurrentUser {
        super::users::register(conn, name, "pw").unwrap().into()
    }

    pub fn creator(conn: &mut SqliteConnection, name: &str) -> CurrentUser {
        let user = super::users::register(conn, name, "pw").unwrap();
        super::users::promote_to_creator(conn, user.id).unwrap();
        super::users::find(conn, user.id).unwrap().into()
    }

    // No registration path mints admins; they are provisioned directly.
    pub fn admin(conn: &mut SqliteConnection, name: &str) -> CurrentUser {
        let user = super::users::register(conn, name, "pw").unwrap();
        diesel::update(users::table.find(user.id))
            .set(users::is_admin.eq(true))
            .execute(conn)
            .unwrap();
        super::users::find(conn, user.id).unwrap().into()
    }

    pub fn song(conn: &mut SqliteConnection, owner: &CurrentUser, title: &str) -> Song {
        super::songs::upload(conn, owner, title, "la la la", None).unwrap()
    }
}

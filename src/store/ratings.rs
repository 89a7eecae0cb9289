use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::rating_models::NewRating;
use crate::schema::{ratings, songs};

/// Upsert: a second rating for the same (user, song) pair updates the
/// existing row in place. Values outside 1..=5 are rejected before any
/// storage call.
pub fn rate(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    song_id_param: i32,
    value: i32,
) -> Result<(), AppError> {
    if !(1..=5).contains(&value) {
        return Err(AppError::validation("rating must be between 1 and 5"));
    }

    conn.transaction::<_, AppError, _>(|conn| {
        songs::table
            .find(song_id_param)
            .select(songs::id)
            .first::<i32>(conn)
            .optional()?
            .ok_or(AppError::NotFound("song"))?;

        let updated = diesel::update(
            ratings::table
                .filter(ratings::user_id.eq(user_id_param))
                .filter(ratings::song_id.eq(song_id_param)),
        )
        .set(ratings::rating.eq(value))
        .execute(conn)?;

        if updated == 0 {
            diesel::insert_into(ratings::table)
                .values(&NewRating {
                    user_id: user_id_param,
                    song_id: song_id_param,
                    rating: value,
                })
                .execute(conn)?;
        }
        Ok(())
    })
}

pub fn has_rated(
    conn: &mut SqliteConnection,
    user_id_param: i32,
    song_id_param: i32,
) -> Result<bool, AppError> {
    Ok(ratings::table
        .filter(ratings::user_id.eq(user_id_param))
        .filter(ratings::song_id.eq(song_id_param))
        .select(ratings::id)
        .first::<i32>(conn)
        .optional()?
        .is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_conn;
    use crate::store::{songs as songs_store, test_support};

    #[test]
    fn rating_twice_keeps_one_row_with_the_latest_value() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let dora = test_support::listener(&mut conn, "dora");
        let song = test_support::song(&mut conn, &bob, "Rated");

        rate(&mut conn, dora.id, song.id, 2).unwrap();
        rate(&mut conn, dora.id, song.id, 5).unwrap();

        let rows: i64 = ratings::table
            .filter(ratings::user_id.eq(dora.id))
            .filter(ratings::song_id.eq(song.id))
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(songs_store::average_rating(&mut conn, song.id).unwrap(), 5.0);
    }

    #[test]
    fn ratings_from_different_users_coexist() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let dora = test_support::listener(&mut conn, "dora");
        let evan = test_support::listener(&mut conn, "evan");
        let song = test_support::song(&mut conn, &bob, "Shared");

        rate(&mut conn, dora.id, song.id, 3).unwrap();
        rate(&mut conn, evan.id, song.id, 5).unwrap();

        assert!(has_rated(&mut conn, dora.id, song.id).unwrap());
        assert!(has_rated(&mut conn, evan.id, song.id).unwrap());
        assert_eq!(songs_store::average_rating(&mut conn, song.id).unwrap(), 4.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let dora = test_support::listener(&mut conn, "dora");
        let song = test_support::song(&mut conn, &bob, "Strict");

        for bad in [0, 6, -1] {
            assert!(matches!(
                rate(&mut conn, dora.id, song.id, bad).unwrap_err(),
                AppError::Validation(_)
            ));
        }
        assert!(!has_rated(&mut conn, dora.id, song.id).unwrap());
    }

    #[test]
    fn rating_a_missing_song_is_not_found() {
        let mut conn = test_conn();
        let dora = test_support::listener(&mut conn, "dora");
        assert!(matches!(
            rate(&mut conn, dora.id, 404, 3).unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::errors::AppError;
use crate::models::album_models::AlbumSummary;
use crate::models::song_models::SongSummary;
use crate::schema::{album_songs, albums, songs, users};

/// Case-insensitive substring match across the catalog. Songs match on
/// title, artist username, or lyrics; albums on name, artist username,
/// or any member song's title. The empty query matches everything.
pub fn search(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<(Vec<SongSummary>, Vec<AlbumSummary>), AppError> {
    let pattern = format!("%{}%", query);

    let songs_found = songs::table
        .inner_join(users::table)
        .filter(
            songs::title
                .like(pattern.clone())
                .or(users::username.like(pattern.clone()))
                .or(songs::lyrics.like(pattern.clone())),
        )
        .select((songs::id, songs::title, users::username))
        .order(songs::id.asc())
        .load(conn)?;

    let album_ids_by_song_title: Vec<i32> = album_songs::table
        .inner_join(songs::table)
        .filter(songs::title.like(pattern.clone()))
        .select(album_songs::album_id)
        .load(conn)?;

    let albums_found = albums::table
        .inner_join(users::table)
        .filter(
            albums::name
                .like(pattern.clone())
                .or(users::username.like(pattern))
                .or(albums::id.eq_any(album_ids_by_song_title)),
        )
        .select((albums::id, albums::name, users::username))
        .order(albums::id.asc())
        .load(conn)?;

    Ok((songs_found, albums_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_conn;
    use crate::store::{albums as albums_store, test_support};

    #[test]
    fn empty_query_matches_the_whole_catalog() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let one = test_support::song(&mut conn, &bob, "One");
        test_support::song(&mut conn, &bob, "Two");
        albums_store::create(&mut conn, &bob, "Everything", &[one.id]).unwrap();

        let (songs_found, albums_found) = search(&mut conn, "").unwrap();
        assert_eq!(songs_found.len(), 2);
        assert_eq!(albums_found.len(), 1);
    }

    #[test]
    fn lyrics_only_match_finds_the_song_and_nothing_else() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let hit = crate::store::songs::upload(
            &mut conn,
            &bob,
            "Plain Title",
            "a very zanzibar chorus",
            None,
        )
        .unwrap();
        crate::store::songs::upload(&mut conn, &bob, "Other", "unrelated words", None).unwrap();
        albums_store::create(&mut conn, &bob, "Unrelated Album", &[]).unwrap();

        let (songs_found, albums_found) = search(&mut conn, "zanzibar").unwrap();
        assert_eq!(songs_found.len(), 1);
        assert_eq!(songs_found[0].id, hit.id);
        assert!(albums_found.is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        test_support::song(&mut conn, &bob, "Silver Morning");

        let (songs_found, _) = search(&mut conn, "SILVER").unwrap();
        assert_eq!(songs_found.len(), 1);
    }

    #[test]
    fn artist_username_matches_both_songs_and_albums() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bobby");
        let carol = test_support::creator(&mut conn, "carol");
        test_support::song(&mut conn, &bob, "His");
        test_support::song(&mut conn, &carol, "Hers");
        albums_store::create(&mut conn, &bob, "His Album", &[]).unwrap();

        let (songs_found, albums_found) = search(&mut conn, "bobby").unwrap();
        assert_eq!(songs_found.len(), 1);
        assert_eq!(albums_found.len(), 1);
    }

    #[test]
    fn album_matches_through_a_member_song_title() {
        let mut conn = test_conn();
        let bob = test_support::creator(&mut conn, "bob");
        let member = test_support::song(&mut conn, &bob, "Hidden Gem");
        albums_store::create(&mut conn, &bob, "Plain Name", &[member.id]).unwrap();
        albums_store::create(&mut conn, &bob, "Empty", &[]).unwrap();

        let (_, albums_found) = search(&mut conn, "gem").unwrap();
        assert_eq!(albums_found.len(), 1);
        assert_eq!(albums_found[0].name, "Plain Name");
    }
}

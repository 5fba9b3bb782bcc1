//! Cache key builders.
//!
//! Key formats are part of the persisted interface (existing deployments
//! carry entries under them), so they are reproduced here verbatim and
//! covered by tests:
//!
//! - `album:<id>` / `song:<id>` for detail reads
//! - `albums:<releaseDate>:page:<page>:limit:<limit>`
//! - `songs:album:<album>:page:<page>:limit:<limit>`
//! - `users:charge:<charge>:page:<page>:limit:<limit>`
//!
//! An absent list filter interpolates the fixed sentinel `any`, so all
//! unfiltered queries for a given page/limit share one entry.

use cadenza_core::{AlbumId, PageQuery, SongId};

/// Sentinel interpolated for an absent filter value.
const ANY_FILTER: &str = "any";

/// Key for a single album.
#[must_use]
pub fn album_details(id: AlbumId) -> String {
    format!("album:{}", id)
}

/// Key for a page of albums filtered by release date.
#[must_use]
pub fn albums_page(release_date: Option<&str>, page: PageQuery) -> String {
    format!(
        "albums:{}:page:{}:limit:{}",
        release_date.unwrap_or(ANY_FILTER),
        page.page,
        page.limit
    )
}

/// Key for a single song.
#[must_use]
pub fn song_details(id: SongId) -> String {
    format!("song:{}", id)
}

/// Key for a page of songs filtered by album name.
#[must_use]
pub fn songs_page(album: Option<&str>, page: PageQuery) -> String {
    format!(
        "songs:album:{}:page:{}:limit:{}",
        album.unwrap_or(ANY_FILTER),
        page.page,
        page.limit
    )
}

/// Key for a page of users filtered by charge.
#[must_use]
pub fn users_page(charge: Option<&str>, page: PageQuery) -> String {
    format!(
        "users:charge:{}:page:{}:limit:{}",
        charge.unwrap_or(ANY_FILTER),
        page.page,
        page.limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_details_key() {
        let id = AlbumId::new();
        assert_eq!(album_details(id), format!("album:{}", id));
    }

    #[test]
    fn test_song_details_key() {
        let id = SongId::new();
        assert_eq!(song_details(id), format!("song:{}", id));
    }

    #[test]
    fn test_albums_page_key_with_filter() {
        let key = albums_page(Some("2020-01-01"), PageQuery::new(2, 5));
        assert_eq!(key, "albums:2020-01-01:page:2:limit:5");
    }

    #[test]
    fn test_albums_page_key_without_filter() {
        let key = albums_page(None, PageQuery::default());
        assert_eq!(key, "albums:any:page:1:limit:10");
    }

    #[test]
    fn test_songs_page_key() {
        assert_eq!(
            songs_page(Some("Evermore"), PageQuery::new(1, 10)),
            "songs:album:Evermore:page:1:limit:10"
        );
        assert_eq!(
            songs_page(None, PageQuery::new(3, 20)),
            "songs:album:any:page:3:limit:20"
        );
    }

    #[test]
    fn test_users_page_key() {
        assert_eq!(
            users_page(Some("producer"), PageQuery::new(1, 10)),
            "users:charge:producer:page:1:limit:10"
        );
        assert_eq!(
            users_page(None, PageQuery::default()),
            "users:charge:any:page:1:limit:10"
        );
    }

    #[test]
    fn test_identical_queries_share_a_key() {
        let a = albums_page(Some("2020-01-01"), PageQuery::new(1, 10));
        let b = albums_page(Some("2020-01-01"), PageQuery::new(1, 10));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_pagination_gets_distinct_keys() {
        let base = albums_page(Some("2020-01-01"), PageQuery::new(1, 10));
        assert_ne!(base, albums_page(Some("2020-01-01"), PageQuery::new(2, 10)));
        assert_ne!(base, albums_page(Some("2020-01-01"), PageQuery::new(1, 20)));
        assert_ne!(base, albums_page(Some("2020-01-02"), PageQuery::new(1, 10)));
    }
}

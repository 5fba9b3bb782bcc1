//! End-to-end tests driving the real router with in-memory repositories
//! and an in-memory cache.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cadenza_config::ServerConfig;
use cadenza_core::{
    Album, AlbumId, CatalogError, CatalogResult, PageQuery, Song, SongId, User, UserId,
};
use cadenza_repository::{AlbumRepository, SongRepository, UserRepository};
use cadenza_rest::{create_router, AppState};
use cadenza_security::PasswordHasher;
use cadenza_service::{
    cache::{CacheAside, CacheStore},
    AlbumServiceImpl, SongServiceImpl, UserServiceImpl,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> CatalogResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CatalogResult<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }
}

struct UnreachableCacheStore;

#[async_trait]
impl CacheStore for UnreachableCacheStore {
    async fn get_raw(&self, _key: &str) -> CatalogResult<Option<String>> {
        Err(CatalogError::Cache("connection refused".to_string()))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> CatalogResult<()> {
        Err(CatalogError::Cache("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> CatalogResult<bool> {
        Err(CatalogError::Cache("connection refused".to_string()))
    }
}

#[derive(Default)]
struct InMemoryAlbumRepository {
    albums: Mutex<HashMap<AlbumId, Album>>,
    reads: AtomicUsize,
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn find_by_id(&self, id: AlbumId) -> CatalogResult<Option<Album>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.albums.lock().unwrap().get(&id).cloned())
    }

    async fn find_page(
        &self,
        release_date: Option<&str>,
        page: PageQuery,
    ) -> CatalogResult<Vec<Album>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let mut albums: Vec<Album> = self
            .albums
            .lock()
            .unwrap()
            .values()
            .filter(|a| release_date.map_or(true, |d| a.release_date == d))
            .cloned()
            .collect();
        albums.sort_by_key(|a| a.id.to_string());
        Ok(albums
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn insert(&self, album: &Album) -> CatalogResult<Album> {
        self.albums.lock().unwrap().insert(album.id, album.clone());
        Ok(album.clone())
    }

    async fn update(&self, album: &Album) -> CatalogResult<Album> {
        self.albums.lock().unwrap().insert(album.id, album.clone());
        Ok(album.clone())
    }

    async fn delete(&self, id: AlbumId) -> CatalogResult<bool> {
        Ok(self.albums.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
struct InMemorySongRepository {
    songs: Mutex<HashMap<SongId, Song>>,
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn find_by_id(&self, id: SongId) -> CatalogResult<Option<Song>> {
        Ok(self.songs.lock().unwrap().get(&id).cloned())
    }

    async fn find_page(&self, album: Option<&str>, page: PageQuery) -> CatalogResult<Vec<Song>> {
        let mut songs: Vec<Song> = self
            .songs
            .lock()
            .unwrap()
            .values()
            .filter(|s| album.map_or(true, |a| s.album == a))
            .cloned()
            .collect();
        songs.sort_by_key(|s| s.id.to_string());
        Ok(songs
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn insert(&self, song: &Song) -> CatalogResult<Song> {
        self.songs.lock().unwrap().insert(song.id, song.clone());
        Ok(song.clone())
    }

    async fn update(&self, song: &Song) -> CatalogResult<Song> {
        self.songs.lock().unwrap().insert(song.id, song.clone());
        Ok(song.clone())
    }

    async fn delete(&self, id: SongId) -> CatalogResult<bool> {
        Ok(self.songs.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> CatalogResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> CatalogResult<Option<User>> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.email == email)
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id.to_string());
        Ok(users.into_iter().next())
    }

    async fn find_page(&self, charge: Option<&str>, page: PageQuery) -> CatalogResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| charge.map_or(true, |c| u.charge == c))
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id.to_string());
        Ok(users
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn insert(&self, user: &User) -> CatalogResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> CatalogResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> CatalogResult<bool> {
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

struct TestApp {
    router: Router,
    album_repository: Arc<InMemoryAlbumRepository>,
}

fn build_app(cache_store: Arc<dyn CacheStore>) -> TestApp {
    let album_repository = Arc::new(InMemoryAlbumRepository::default());
    let song_repository = Arc::new(InMemorySongRepository::default());
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let cache = CacheAside::new(cache_store);

    let state = AppState::new(
        Arc::new(AlbumServiceImpl::new(album_repository.clone(), cache.clone())),
        Arc::new(SongServiceImpl::new(song_repository, cache.clone())),
        Arc::new(UserServiceImpl::new(
            user_repository,
            Arc::new(PasswordHasher::new()),
            cache,
        )),
    );

    TestApp {
        router: create_router(state, &ServerConfig::default()),
        album_repository,
    }
}

fn test_app() -> TestApp {
    build_app(Arc::new(InMemoryCacheStore::default()))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn create_album_body() -> Value {
    json!({
        "album": "A",
        "artist": "B",
        "releaseDate": "2020-01-01",
        "songs": []
    })
}

// ---------------------------------------------------------------------------
// Album lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_album_crud_lifecycle() {
    let app = test_app();

    // Create.
    let (status, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["album"], "A");

    // Read back with matching fields.
    let (status, body) = send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["album"], "A");
    assert_eq!(body["artist"], "B");
    assert_eq!(body["releaseDate"], "2020-01-01");

    // Delete.
    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("DELETE")
            .uri(format!("/deleteAlbum/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("deleted"));

    // Gone, even though the read above primed the cache: the delete drops
    // the detail entry.
    let (status, _) = send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is also a 404.
    let (status, _) = send(
        &app.router,
        Request::builder()
            .method("DELETE")
            .uri(format!("/deleteAlbum/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_album_after_delete_is_not_found() {
    let app = test_app();

    let (_, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    // Delete before any cached read exists.
    send(
        &app.router,
        Request::builder()
            .method("DELETE")
            .uri(format!("/deleteAlbum/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let (status, body) = send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_create_album_with_missing_field_is_400() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", json!({ "album": "A" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_get_missing_album_is_404_and_uncached() {
    let app = test_app();

    let id = AlbumId::new();
    for _ in 0..2 {
        let (status, _) =
            send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // Two store reads: the miss was not negatively cached.
    assert_eq!(app.album_repository.reads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_malformed_album_id_is_404() {
    let app = test_app();
    let (status, _) = send(&app.router, get_request("/getAlbumDetails/not-a-uuid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Cache behavior over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_repeated_list_hits_store_once() {
    let app = test_app();
    send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;

    let before = app.album_repository.reads.load(Ordering::SeqCst);

    let (status, first) = send(
        &app.router,
        get_request("/getAlbums?releaseDate=2020-01-01&page=1&limit=10"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, second) = send(
        &app.router,
        get_request("/getAlbums?releaseDate=2020-01-01&page=1&limit=10"),
    )
    .await;

    assert_eq!(first, second);
    assert_eq!(first["albums"].as_array().unwrap().len(), 1);
    // Identical filter/page/limit: exactly one store query across both calls.
    assert_eq!(app.album_repository.reads.load(Ordering::SeqCst), before + 1);
}

#[tokio::test]
async fn test_update_does_not_refresh_cached_detail() {
    let app = test_app();

    let (_, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    // Prime the cache.
    send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;

    // Full update through the store.
    let (status, updated) = send(
        &app.router,
        json_request(
            "PUT",
            &format!("/updateAlbum/{}", id),
            json!({
                "album": "A",
                "artist": "New Artist",
                "releaseDate": "2020-01-01",
                "songs": []
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["artist"], "New Artist");

    // The cached read still reports the stale artist until TTL expiry.
    let (_, stale) = send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
    assert_eq!(stale["artist"], "B");
}

#[tokio::test]
async fn test_patch_with_unknown_field_is_400() {
    let app = test_app();

    let (_, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app.router,
        json_request(
            "PATCH",
            &format!("/updateProperties/{}", id),
            json!({ "label": "not-allowed" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_patch_updates_allowed_field() {
    let app = test_app();

    let (_, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, patched) = send(
        &app.router,
        json_request(
            "PATCH",
            &format!("/updateProperties/{}", id),
            json!({ "artist": "Patched" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["artist"], "Patched");
    assert_eq!(patched["album"], "A");
}

#[tokio::test]
async fn test_reads_return_200_when_cache_is_down() {
    let app = build_app(Arc::new(UnreachableCacheStore));

    let (_, body) = send(
        &app.router,
        json_request("POST", "/createAlbum", create_album_body()),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app.router, get_request(&format!("/getAlbumDetails/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["album"], "A");

    let (status, body) = send(&app.router, get_request("/getAlbums")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["albums"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Songs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_song_lifecycle_and_list_filter() {
    let app = test_app();

    let (status, created) = send(
        &app.router,
        json_request(
            "POST",
            "/createSong",
            json!({
                "name": "willow",
                "album": "Evermore",
                "composer": "C",
                "lyricist": "L",
                "producer": "P"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app.router, get_request(&format!("/getSongDetails/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "willow");

    let (status, body) = send(&app.router, get_request("/getSongs?album=Evermore")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["songs"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app.router, get_request("/getSongs?album=Folklore")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["songs"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Users and the identity gate
// ---------------------------------------------------------------------------

async fn register_user(router: &Router) -> String {
    let (status, body) = send(
        router,
        json_request(
            "POST",
            "/register",
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "charge": "producer",
                "password": "correct-horse"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_and_login() {
    let app = test_app();
    let id = register_user(&app.router).await;

    let (status, body) = send(
        &app.router,
        json_request(
            "POST",
            "/login",
            json!({ "email": "ana@example.com", "password": "correct-horse" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, _) = send(
        &app.router,
        json_request(
            "POST",
            "/login",
            json!({ "email": "ana@example.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_requires_a_resolvable_user_id() {
    let app = test_app();

    // No header at all.
    let (status, _) = send(&app.router, get_request("/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A well-formed but unknown id.
    let (status, _) = send(
        &app.router,
        Request::builder()
            .uri("/me")
            .header("Authorization", UserId::new().to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A registered id resolves, and the response carries no password.
    let id = register_user(&app.router).await;
    let (status, body) = send(
        &app.router,
        Request::builder()
            .uri("/me")
            .header("Authorization", id.as_str())
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ana@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_users_filters_by_charge() {
    let app = test_app();
    register_user(&app.router).await;

    let (status, body) = send(&app.router, get_request("/getUsers?charge=producer")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["charge"], "producer");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();
    let (status, body) = send(&app.router, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

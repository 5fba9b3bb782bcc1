//! Process startup: configuration, connection handles, wiring, serve.
//!
//! Both long-lived handles (MySQL pool, Redis pool) are created here once
//! and injected into the layers that need them. An unreachable Redis at
//! startup degrades the process to store-only reads instead of aborting;
//! the cache is never a hard dependency.

use cadenza_config::{AppConfig, ConfigLoader, RedisConfig};
use cadenza_core::{CatalogError, CatalogResult};
use cadenza_repository::{
    DatabasePool, MySqlAlbumRepository, MySqlSongRepository, MySqlUserRepository,
};
use cadenza_rest::{create_router, AppState};
use cadenza_security::PasswordHasher;
use cadenza_service::{
    cache::{CacheAside, CacheStore, RedisCache},
    AlbumServiceImpl, SongServiceImpl, UserServiceImpl,
};
use deadpool_redis::Runtime;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Runs the server until shutdown.
pub async fn run() -> CatalogResult<()> {
    let config = ConfigLoader::from_default_location().load()?;

    info!("Environment: {}", config.app.environment);

    let db_pool = Arc::new(DatabasePool::new(&config.database).await?);
    db_pool.run_migrations().await?;

    let state = build_state(&config, db_pool.clone());
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Wires repositories, the cache accessor, and services into the shared
/// application state.
fn build_state(config: &AppConfig, db_pool: Arc<DatabasePool>) -> AppState {
    let cache = CacheAside::new(build_cache_store(&config.redis));
    let password_hasher = Arc::new(PasswordHasher::new());

    let album_repository = Arc::new(MySqlAlbumRepository::new(db_pool.clone()));
    let song_repository = Arc::new(MySqlSongRepository::new(db_pool.clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool));

    AppState::new(
        Arc::new(AlbumServiceImpl::new(album_repository, cache.clone())),
        Arc::new(SongServiceImpl::new(song_repository, cache.clone())),
        Arc::new(UserServiceImpl::new(user_repository, password_hasher, cache)),
    )
}

/// Creates the cache store, falling back to the disabled no-op store when
/// Redis is switched off or misconfigured.
fn build_cache_store(redis: &RedisConfig) -> Arc<dyn CacheStore> {
    if !redis.enabled {
        info!("Cache disabled by configuration; reads go straight to the store");
        return Arc::new(RedisCache::disabled());
    }

    let mut cfg = deadpool_redis::Config::from_url(&redis.url);
    cfg.pool = Some(deadpool_redis::PoolConfig::new(redis.pool_size));

    match cfg.create_pool(Some(Runtime::Tokio1)) {
        Ok(pool) => {
            info!("Redis cache configured at {}", redis.url);
            Arc::new(RedisCache::new(Arc::new(pool)))
        }
        Err(err) => {
            warn!(
                "Redis unavailable ({}); serving reads from the store only",
                err
            );
            Arc::new(RedisCache::disabled())
        }
    }
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received ctrl-c, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

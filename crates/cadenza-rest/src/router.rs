//! Main application router.

use crate::{
    controllers::{album_controller, health_controller, song_controller, user_controller},
    middleware::{identity_gate, request_logging},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use cadenza_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    // `/me` sits behind the identity gate; everything else is open.
    let gated = Router::new()
        .route("/me", get(user_controller::me))
        .route_layer(middleware::from_fn_with_state(state.clone(), identity_gate));

    let router = Router::new()
        .merge(health_controller::router())
        .merge(album_controller::router())
        .merge(song_controller::router())
        .merge(user_controller::router())
        .merge(gated)
        .route("/", get(root))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Cadenza Music Catalog API"
}

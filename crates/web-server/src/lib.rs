use analytics::SummaryEngine;
use axum::{routing::get, Router};
use catalog_store::CatalogStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub store: CatalogStore,
    pub engine: SummaryEngine,
}

/// Builds the application router over an already-constructed state.
///
/// Split out of `run_server` so tests can drive the exact routing and
/// middleware stack without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/v1/analytics/instructor-summary/:instructor_id",
            get(handlers::get_instructor_summary),
        )
        .route(
            "/api/v1/analytics/course-performance/:instructor_id",
            get(handlers::get_course_performance),
        )
        .route(
            "/api/v1/analytics/performance-trends/:instructor_id",
            get(handlers::get_performance_trends),
        )
        .fallback(handlers::endpoint_not_found)
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every
        // incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server over the given
/// catalog store.
pub async fn run_server(addr: SocketAddr, store: CatalogStore) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState {
        store,
        engine: SummaryEngine::new(),
    });
    let app = router(app_state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

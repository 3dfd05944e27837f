//! Site Host
//!
//! Serves the compiled Leptos bundle, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (503 until the bundle is built)
//! - `GET /health` - Full health status
//!
//! ## Site
//! - `GET /*` - Static files from the dist directory. Paths that match no
//!   file get `index.html`, so the client router can render its 404 view.
//!
//! # Example
//!
//! ```rust,no_run
//! use jepto::config::Config;
//! use jepto::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::new(config.site.clone());
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with health routes, static files and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cache_control = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.site.cache_max_age_secs
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(
            ServeDir::new(state.dist_dir()).fallback(ServeFile::new(state.site.index_path())),
        );

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the site host
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    if !state.bundle_present() {
        tracing::warn!(
            "No index.html in {:?}; build the site with `trunk build --release` in jepto-ui/",
            state.dist_dir()
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Jepto site listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Jepto site host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>jepto</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
        }

        let site = SiteConfig {
            dist_dir: dir.path().to_path_buf(),
            cache_max_age_secs: 120,
        };
        (build_router(AppState::new(site)), dir)
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let response = get_uri(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_bundle() {
        let (app, _dir) = create_test_app(true);
        let response = get_uri(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let (app, _dir) = create_test_app(false);
        let response = get_uri(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "BUNDLE_MISSING");
        assert!(body["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);
        let response = get_uri(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["bundle"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

        let (app, _dir) = create_test_app(false);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(get_uri(app, "/health").await).await).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["bundle"], "missing");
    }

    #[tokio::test]
    async fn test_root_serves_index_with_cache_header() {
        let (app, _dir) = create_test_app(true);
        let response = get_uri(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=120"
        );
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app(true);
        let response = get_uri(app, "/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app(true);
        let response = get_uri(app, "/listings/duplex").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_unknown_path_without_bundle_is_not_found() {
        let (app, _dir) = create_test_app(false);
        let response = get_uri(app, "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

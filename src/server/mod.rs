//! Velocity Site Server
//!
//! Hosts the compiled UI bundle, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (503 until the bundle is deployed)
//! - `GET /health` - Full health status
//!
//! ## Site
//! - `GET /<file>.<ext>` - Static asset from the dist directory (404 JSON if absent)
//! - `GET /<anything else>` - `index.html`, routing happens in the browser
//!
//! # Example
//!
//! ```rust,ignore
//! use velocity_site::config::Config;
//! use velocity_site::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _) = Config::load_default();
//!     let state = AppState::new(config.server.clone(), config.site.clone());
//!     serve(state).await?;
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
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.server.cors_origins);
    let timeout = Duration::from_secs(state.server.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback(routes::spa::serve_site)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; same-origin only when none are set
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::HEAD])
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.server.addr();
    let dist_dir = state.site.dist_dir.clone();

    if !state.bundle_present().await {
        tracing::warn!(index = ?state.index_path(), "UI bundle not found, site routes will return 503");
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(dist_dir = ?dist_dir, "Velocity site listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Velocity site shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
    use crate::config::{ServerConfig, SiteConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>velocity</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.path().join("velocity-ui.js"), "export default {}").unwrap();
        }

        let site = SiteConfig {
            dist_dir: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        let router = build_router(AppState::new(ServerConfig::default(), site));

        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        assert_eq!(get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_bundle() {
        let (app, _dir) = create_test_app(true);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);

        let (app, _dir) = create_test_app(false);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["bundle"], "missing");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_client_routes_get_index() {
        for uri in ["/", "/vs-jobber", "/login", "/signup?plan=pro", "/no/such/page"] {
            let (app, _dir) = create_test_app(true);
            let response = get(app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
            assert_eq!(body_string(response).await, INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app(true);
        let response = get(app, "/velocity-ui.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "export default {}");
    }

    #[tokio::test]
    async fn test_missing_asset_is_json_404() {
        let (app, _dir) = create_test_app(true);
        let response = get(app, "/missing.wasm").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["request_id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn test_client_route_without_bundle_is_503() {
        let (app, _dir) = create_test_app(false);
        let response = get(app, "/vs-jobber").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let (app, _dir) = create_test_app(true);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        let server = ServerConfig {
            cors_origins: vec!["https://velocitylogic.test".to_string(), "bad\norigin".to_string()],
            ..ServerConfig::default()
        };
        let site = SiteConfig {
            dist_dir: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        let app = build_router(AppState::new(server, site));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .header(header::ORIGIN, "https://velocitylogic.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://velocitylogic.test"
        );
    }
}

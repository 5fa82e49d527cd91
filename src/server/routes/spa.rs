//! Site Routes
//!
//! Everything outside `/health` lands here. Paths whose last segment has a
//! file extension are bundle assets served from the dist directory; every
//! other path is a client-side route and gets the entry document, so deep
//! links such as `/vs-jobber` or `/signup?plan=pro` boot the app.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// `true` when the final path segment looks like a file name
pub fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Fallback handler for every non-health path
pub async fn serve_site(State(state): State<Arc<AppState>>, req: Request) -> ServerResult<Response> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Err(ServerError::MethodNotAllowed(req.method().to_string()));
    }

    let path = req.uri().path().to_string();
    if is_asset_path(&path) {
        serve_asset(&state, req, path).await
    } else {
        serve_index(&state).await
    }
}

async fn serve_asset(state: &AppState, req: Request, path: String) -> ServerResult<Response> {
    let response = ServeDir::new(&state.site.dist_dir)
        .oneshot(req)
        .await
        .unwrap_or_else(|e: Infallible| match e {});

    if response.status() == StatusCode::NOT_FOUND {
        return Err(ServerError::NotFound(path));
    }
    Ok(response.map(Body::new))
}

async fn serve_index(state: &AppState) -> ServerResult<Response> {
    let index = state.index_path();
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Ok(([(header::CACHE_CONTROL, "no-cache")], Html(html)).into_response()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ServerError::ServiceUnavailable(
            format!("UI bundle not found at {}", index.display()),
        )),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_detection() {
        assert!(is_asset_path("/velocity-ui-1a2b.wasm"));
        assert!(is_asset_path("/assets/style.css"));
        assert!(is_asset_path("/favicon.ico"));

        assert!(!is_asset_path("/"));
        assert!(!is_asset_path("/vs-jobber"));
        assert!(!is_asset_path("/signup"));
        assert!(!is_asset_path("/v1.2/pricing/"));
    }
}

//! The HTTP surface of the CMS: `/health`, the `/api` resources, and
//! `/media` when uploads live on local disk.
//!
//! `main.rs` and the integration tests both build their app here, so tests
//! exercise the same session gate and limits as production.

use std::path::Path;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::session::require_session;
use crate::routes;
use crate::state::AppState;

/// Room for multipart boundaries and the `folder` field on top of the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assemble the application.
///
/// `media_root` is the local storage directory; pass `None` when uploads
/// go to S3 and the bucket serves them.
///
/// Outermost first, a request passes CORS, gets a request id, is traced,
/// then hits the timeout and panic guard before the body limit and the
/// session gate. Preflight requests are answered by CORS and never reach
/// the gate.
pub fn build_app_router(
    state: AppState,
    config: &ServerConfig,
    media_root: Option<&Path>,
) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let mut app = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes());

    if let Some(root) = media_root {
        app = app.nest_service("/media", ServeDir::new(root));
    }

    app.layer(from_fn_with_state(state.clone(), require_session))
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the admin UI and the public site.
///
/// Credentials are allowed so browsers send the session cookie, which in
/// turn forbids a wildcard origin: every origin is listed explicitly.
///
/// # Panics
///
/// Panics at startup if a configured origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

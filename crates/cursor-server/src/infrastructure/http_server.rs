//! HTTP server: routes, middleware and the serve loop.
//!
//! ```text
//! request ─► CorsLayer ─► log_request ─► CatchPanicLayer ─► handler ─► CursorService
//! ```
//!
//! - **CORS** mirrors the caller's origin, method and headers and allows
//!   credentials, so any origin may call the service.
//! - **log_request** logs every request line and every response status,
//!   including 4xx rejections and 500s.
//! - **CatchPanicLayer** turns a panicking handler into the same 500 body
//!   that [`ApiError`] produces, so no fault escapes as a dropped connection.
//!
//! Each request runs on its own Tokio task; the only thing they contend on is
//! the service's action gate.  Moves and focuses are spawned onto a separate
//! task, so a client that disconnects mid-request cannot cancel them: a
//! queued move still lands and a focus still holds the gate for its full
//! duration.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::application::CursorService;
use crate::domain::{
    FocusCursorResponse, MoveCursorRequest, MoveCursorResponse, PositionJson, ServerConfig,
};

use super::api_error::{internal_error_response, ApiError};

/// Shared handler state.
type SharedService = Arc<CursorService>;

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the application router around an existing service.
///
/// Exposed separately from [`run_server`] so tests can drive the full stack
/// (middleware included) without binding a socket.
pub fn build_router(service: SharedService) -> Router {
    Router::new()
        .route("/get_cursor_position/", get(get_cursor_position))
        .route(
            "/move_cursor/",
            post(move_cursor).layer(middleware::map_request(default_json_content_type)),
        )
        .route("/focus_cursor/", get(focus_cursor))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(log_request))
        .layer(permissive_cors())
        .with_state(service)
}

/// Serves the cursor API until `shutdown` resolves.
///
/// Creates the [`CursorService`] from `config`, binds `config.bind_addr` and
/// serves requests.  When `shutdown` completes the listener stops accepting
/// and in-flight requests are allowed to finish.
///
/// # Errors
///
/// Returns an error if the configured start position is off the canvas, if
/// the listener cannot be bound (port in use, missing permission), or if the
/// server fails while running.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let service = CursorService::new(&config).context("invalid cursor service configuration")?;
    let canvas = service.canvas();

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!(
        "cursor service listening on {} (canvas {}x{}, start ({}, {}))",
        listener.local_addr()?,
        canvas.width(),
        canvas.height(),
        config.start_position.x,
        config.start_position.y
    );

    axum::serve(listener, build_router(Arc::new(service)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /get_cursor_position/`
async fn get_cursor_position(State(service): State<SharedService>) -> Json<PositionJson> {
    Json(service.position().into())
}

/// `POST /move_cursor/`
async fn move_cursor(
    State(service): State<SharedService>,
    Json(request): Json<MoveCursorRequest>,
) -> Result<Json<MoveCursorResponse>, ApiError> {
    let batch = request.to_batch();
    let result = tokio::spawn(async move { service.move_cursor(&batch).await }).await??;
    Ok(Json(MoveCursorResponse {
        new_position: result.new_position.into(),
        move_time: result.move_time_ms,
    }))
}

/// `GET /focus_cursor/`
async fn focus_cursor(
    State(service): State<SharedService>,
) -> Result<Json<FocusCursorResponse>, ApiError> {
    let focus_time = tokio::spawn(async move { service.focus().await }).await?;
    Ok(Json(FocusCursorResponse {
        focus_time: u64::try_from(focus_time.as_millis()).unwrap_or(u64::MAX),
    }))
}

// ── Middleware ────────────────────────────────────────────────────────────────

/// Logs the request line and the response status of every request.
async fn log_request(request: Request, next: Next) -> Response {
    info!("request: {} {}", request.method(), request.uri());
    let response = next.run(request).await;
    info!("response status: {}", response.status().as_u16());
    response
}

/// Treats a move body sent without a `Content-Type` as JSON.
async fn default_json_content_type(mut request: Request) -> Request {
    request
        .headers_mut()
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    request
}

/// CORS policy equivalent to "any origin, any method, any header, with
/// credentials".  Wildcards cannot be combined with credentials, so the
/// request's own values are echoed back instead.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Converts a handler panic into the standard 500 body.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    error!("an error occurred: {details}");
    internal_error_response(&details)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

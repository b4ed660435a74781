//! HTTP server mode: the gallery page and its "Load More" action

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::gallery::{self, PageSource, ViewId, ViewStore};
use crate::render::{self, PageText};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Page 1 of the character listing
    pub endpoint: String,
    /// Page headings
    pub text: PageText,
    /// Idle time after which a view is dropped
    pub view_ttl: Duration,
    /// Upper bound on live views
    pub max_views: usize,
}

/// App state shared across handlers
pub struct AppState {
    store: ViewStore,
    source: Arc<dyn PageSource>,
    endpoint: String,
    text: PageText,
}

impl AppState {
    pub fn new(config: &ServerConfig, source: Arc<dyn PageSource>) -> Self {
        Self {
            store: ViewStore::new(config.view_ttl, config.max_views),
            source,
            endpoint: config.endpoint.clone(),
            text: config.text.clone(),
        }
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }
}

/// Build the router
pub fn router(state: Arc<AppState>) -> Router {
    // The JSON snapshot is readable from other origins; pages are same-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/views/:id", get(view_snapshot))
        .layer(cors);

    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/views/:id", get(show_view).delete(close_view))
        .route("/views/:id/load-more", post(load_more))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, source: Arc<dyn PageSource>) -> Result<()> {
    let state = Arc::new(AppState::new(&config, source));

    spawn_evictor(Arc::clone(&state), config.view_ttl);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(endpoint = %config.endpoint, "Starting gallery on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {}: {e}", config.port)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Periodically drop idle views
fn spawn_evictor(state: Arc<AppState>, ttl: Duration) {
    let period = (ttl / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = state.store.evict_expired().await;
            if evicted > 0 {
                tracing::debug!(evicted, "evicted idle views");
            }
        }
    });
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "views": state.store.len().await }))
}

/// New view: load page 1 server-side, then render it
async fn index(State(state): State<Arc<AppState>>) -> Response {
    let view = match gallery::initial_load(state.source.as_ref(), &state.endpoint).await {
        Ok(view) => view,
        Err(e) if e.is_upstream() => {
            tracing::warn!(endpoint = %state.endpoint, error = %e, "initial load failed");
            return error_page(&state, StatusCode::BAD_GATEWAY, "The character API could not be loaded.");
        }
        Err(e) => {
            tracing::error!(endpoint = %state.endpoint, error = %e, "initial load failed");
            return error_page(&state, StatusCode::INTERNAL_SERVER_ERROR, "The gallery could not be created.");
        }
    };

    let id = state.store.insert(view).await;
    tracing::debug!(view = id, "view created");
    render_view(&state, id).await
}

/// Re-render an existing view
async fn show_view(State(state): State<Arc<AppState>>, Path(id): Path<ViewId>) -> Response {
    render_view(&state, id).await
}

/// "Load More": always lands back on the view, whatever happened
async fn load_more(State(state): State<Arc<AppState>>, Path(id): Path<ViewId>) -> Response {
    let Some(view) = state.store.get(id).await else {
        return view_not_found(&state, id);
    };

    match gallery::load_more_shared(&view, state.source.as_ref()).await {
        Ok(outcome) => tracing::debug!(view = id, ?outcome, "load more"),
        Err(e) if e.is_upstream() => tracing::warn!(view = id, error = %e, "load more failed"),
        Err(e) => tracing::error!(view = id, error = %e, "load more failed"),
    }

    Redirect::to(&format!("/views/{id}")).into_response()
}

/// JSON snapshot of a view
async fn view_snapshot(State(state): State<Arc<AppState>>, Path(id): Path<ViewId>) -> Response {
    let (Some(view), Some(times)) = (state.store.get(id).await, state.store.times(id).await) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": Error::ViewNotFound { id }.to_string() })),
        )
            .into_response();
    };

    let view = view.lock().await;
    Json(json!({
        "id": id,
        "created_at": times.created_at,
        "last_seen": times.last_seen,
        "has_more": view.has_more(),
        "page": view.page,
        "results": view.results,
    }))
    .into_response()
}

/// Unmount a view
async fn close_view(State(state): State<Arc<AppState>>, Path(id): Path<ViewId>) -> StatusCode {
    if state.store.remove(id).await {
        tracing::debug!(view = id, "view closed");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn render_view(state: &AppState, id: ViewId) -> Response {
    let Some(view) = state.store.get(id).await else {
        return view_not_found(state, id);
    };

    let view = view.lock().await;
    match render::render_gallery(id, &view, &state.text) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(view = id, error = %e, "render failed");
            error_page(state, StatusCode::INTERNAL_SERVER_ERROR, "The page could not be rendered.")
        }
    }
}

fn view_not_found(state: &AppState, id: ViewId) -> Response {
    error_page(state, StatusCode::NOT_FOUND, &Error::ViewNotFound { id }.to_string())
}

fn error_page(state: &AppState, status: StatusCode, message: &str) -> Response {
    match render::render_error(status.as_u16(), message, &state.text) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(_) => (status, message.to_string()).into_response(),
    }
}

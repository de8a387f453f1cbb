//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::TaskStore;
use crate::task::Task;

use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// The in-memory task collection
    pub store: TaskStore,
}

/// Build the application router.
///
/// Each path accepts exactly one HTTP method; any other method on a
/// known path falls through to [`not_found`], a plain-text 404 rather
/// than the default 405. Unknown paths get axum's default 404.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tasks/create", post(create_task).fallback(not_found))
        .route("/tasks/list", get(list_tasks).fallback(not_found))
        .route("/tasks/update", put(update_task).fallback(not_found))
        .route("/tasks/delete", delete(delete_task).fallback(not_found))
        .route("/tasks/get", get(get_task).fallback(not_found))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        config: config.clone(),
        store: TaskStore::new(),
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Method-mismatch fallback. Matches the plain-text body of the Go
/// standard library's `http.Error`.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Raw `id` query parameter, parsed by [`parse_task_id`].
#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

/// Parse the `id` query parameter as a base-10 i64.
fn parse_task_id(query: &IdQuery) -> Result<i64, ApiError> {
    query
        .id
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or(ApiError::InvalidTaskId)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /tasks/create - Store the task from the request body verbatim.
///
/// No field validation beyond JSON decoding: empty titles, negative IDs,
/// and IDs already in use are all accepted.
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::InvalidRequestBody)?;
    let task = state.store.create(req.task).await;
    Ok(Json(CreateTaskResponse { task }))
}

/// GET /tasks/list - Return every task in insertion order.
async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<ListTasksResponse> {
    let tasks = state.store.list().await;
    Json(ListTasksResponse { tasks })
}

/// PUT /tasks/update?id=N - Replace the task with the given ID.
///
/// Responds 200 whether or not a task matched; the no-match payload is a
/// zero-valued task.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
    let id = parse_task_id(&query)?;
    let Json(req) = body.map_err(|_| ApiError::InvalidRequestBody)?;
    let updated_task = state
        .store
        .update(id, req.updated_task)
        .await
        .unwrap_or_else(|| {
            tracing::debug!(id, "update matched no task");
            Task::default()
        });
    Ok(Json(UpdateTaskResponse { updated_task }))
}

/// DELETE /tasks/delete?id=N - Remove the task with the given ID.
///
/// Responds 200 whether or not anything was deleted.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let id = parse_task_id(&query)?;
    let deleted_task = state.store.delete(id).await.unwrap_or_else(|| {
        tracing::debug!(id, "delete matched no task");
        Task::default()
    });
    Ok(Json(DeleteTaskResponse { deleted_task }))
}

/// GET /tasks/get?id=N - Return the task with the given ID.
///
/// Responds 200 whether or not a task matched.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<GetTaskResponse>, ApiError> {
    let id = parse_task_id(&query)?;
    let task = state.store.get(id).await.unwrap_or_default();
    Ok(Json(GetTaskResponse { task }))
}

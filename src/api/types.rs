//! API request and response types.
//!
//! Every operation uses a small envelope object on the wire rather than
//! a bare task, so the field name (`task`, `updatedTask`, `deletedTask`,
//! `tasks`) tells the caller what the payload means.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;

/// Request to create a task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    /// The task to store, ID included (the service never generates IDs).
    pub task: Task,
}

/// Response after creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskResponse {
    /// The stored record, echoed back verbatim.
    pub task: Task,
}

/// Request to replace an existing task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    /// Full replacement record. Every field overwrites the stored task,
    /// including the ID.
    #[serde(rename = "updatedTask")]
    pub updated_task: Task,
}

/// Response after updating a task.
///
/// When no task matched the requested ID the payload is a zero-valued
/// task. That is indistinguishable from updating an all-default task;
/// the contract is kept for compatibility with existing clients.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskResponse {
    #[serde(rename = "updatedTask")]
    pub updated_task: Task,
}

/// Response after deleting a task. Zero-valued when nothing matched.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTaskResponse {
    #[serde(rename = "deletedTask")]
    pub deleted_task: Task,
}

/// Response for a single-task lookup. Zero-valued when nothing matched.
#[derive(Debug, Clone, Serialize)]
pub struct GetTaskResponse {
    pub task: Task,
}

/// Response listing every stored task in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

/// JSON error body, `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can report to the client.
///
/// The taxonomy is deliberately shallow: a request either carries an
/// unusable `id` query parameter or an undecodable JSON body. Wrong-method
/// requests never reach a handler; the router answers those with a
/// plain-text 404.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or non-numeric `id` query parameter.
    #[error("Invalid task ID")]
    InvalidTaskId,

    /// Request body was not valid JSON for the expected envelope.
    #[error("Invalid request body")]
    InvalidRequestBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

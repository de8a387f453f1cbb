//! HTTP API for taskd.
//!
//! ## Endpoints
//!
//! - `POST /tasks/create` - Store a new task (caller supplies the ID)
//! - `GET /tasks/list` - List all tasks in insertion order
//! - `PUT /tasks/update?id=N` - Replace the task with the given ID
//! - `DELETE /tasks/delete?id=N` - Remove the task with the given ID
//! - `GET /tasks/get?id=N` - Fetch the task with the given ID
//!
//! Any other method on these paths answers a plain-text 404. Success and
//! not-found lookups alike answer 200 with a JSON body; only an unusable
//! `id` parameter or an undecodable JSON body produces a 400.

mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;

//! # taskd
//!
//! Minimal in-memory task CRUD HTTP service.
//!
//! This library provides:
//! - An HTTP API for creating, reading, updating, deleting, and listing
//!   task records
//! - An in-memory, insertion-ordered task store guarded by a single lock
//!
//! ## Request Flow
//! 1. The router gates each path on its one accepted HTTP method
//! 2. The handler parses the `id` query parameter and/or the JSON body
//! 3. The store mutates or reads the task sequence under its lock
//! 4. The handler serializes the result (or a fixed error) as JSON
//!
//! State is process-lifetime only: a restart discards every task.
//!
//! ## Modules
//! - `api`: HTTP routes, handlers, and wire types
//! - `store`: the in-memory task collection
//! - `task`: the task record
//! - `config`: environment-driven server configuration

pub mod api;
pub mod config;
pub mod store;
pub mod task;

pub use config::Config;
pub use store::TaskStore;
pub use task::Task;

//! In-memory task store.
//!
//! Holds the insertion-ordered task sequence behind a single
//! `tokio::sync::RwLock`. All lookups are linear scans by ID; the first
//! matching entry wins when duplicate IDs exist.

use tokio::sync::RwLock;

use crate::task::Task;

/// The process-wide task collection.
///
/// Every handler goes through this store; the lock is the only
/// synchronization in the service. State lives for the lifetime of the
/// process, restart discards everything.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task verbatim and return the stored record.
    ///
    /// No ID collision check: a task whose ID is already in use is
    /// appended anyway, and later lookups return the earlier entry.
    pub async fn create(&self, task: Task) -> Task {
        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        tracing::debug!(id = task.id, total = tasks.len(), "task created");
        task
    }

    /// Replace the first task whose ID matches `id` with `replacement`.
    ///
    /// The replacement overwrites every field including the ID, so a
    /// replacement carrying a different ID detaches the record from
    /// lookups by the original ID. Returns `None` when no task matches.
    pub async fn update(&self, id: i64, replacement: Task) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let slot = tasks.iter_mut().find(|t| t.id == id)?;
        *slot = replacement.clone();
        tracing::debug!(id, new_id = replacement.id, "task updated");
        Some(replacement)
    }

    /// Remove the first task whose ID matches `id`, preserving the
    /// relative order of the remaining tasks. Returns the removed task,
    /// or `None` when no task matches.
    pub async fn delete(&self, id: i64) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let index = tasks.iter().position(|t| t.id == id)?;
        let removed = tasks.remove(index);
        tracing::debug!(id, total = tasks.len(), "task deleted");
        Some(removed)
    }

    /// Return the first task whose ID matches `id`.
    pub async fn get(&self, id: i64) -> Option<Task> {
        let tasks = self.tasks.read().await;
        tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Return the full sequence in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }
}

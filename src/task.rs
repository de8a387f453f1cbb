//! The task domain record.

use serde::{Deserialize, Serialize};

/// A single task.
///
/// IDs are caller-supplied; the service never generates them and never
/// checks uniqueness. Duplicate IDs coexist and lookups resolve to the
/// first match in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

//! Repository port for task storage, lookup, and removal.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// "Not found" is always communicated through the return value (`None` or
/// `false`), never as an error. Implementations perform no validation; the
/// service layer is responsible for generating collision-free identifiers
/// and validating task fields.
pub trait TaskRepository: Send + Sync {
    /// Stores a task keyed by its identifier and returns the stored value.
    ///
    /// Silently overwrites any task already stored under the same
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unusable.
    fn store(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unusable.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in insertion order.
    ///
    /// An empty store yields an empty vec, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unusable.
    fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces an existing task and returns the stored value.
    ///
    /// Returns `None` and performs no mutation when no task exists under
    /// `task.id()`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unusable.
    fn update(&self, task: &Task) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task by identifier.
    ///
    /// Returns `true` when a task was removed and `false` when the
    /// identifier was absent (a no-op).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unusable.
    fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Service layer for task creation, update, and status transitions.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for a partial task update.
///
/// Fields left unset are left untouched on the stored task; status is never
/// changed by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// The only policy layer: owns identifier generation, the partial-update
/// merge, and status transitions. Holds the repository behind an `Arc` so a
/// dispatcher and the service can share one store instance.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service over the given store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new incomplete task and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is empty and
    /// [`TaskServiceError::Repository`] when the store rejects the write.
    pub fn add_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, request.description, &*self.clock);
        let stored = self.repository.store(&task)?;
        tracing::debug!(id = %stored.id(), "task added");
        Ok(stored)
    }

    /// Returns all tasks in insertion order, unfiltered and unsorted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store lookup fails.
    pub fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks: TaskRepositoryResult<Vec<Task>> = self.repository.list();
        Ok(tasks?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Provided fields replace the stored values; omitted fields and the
    /// completion status are left untouched. Returns `Ok(None)` when no task
    /// exists for the requested identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a provided title is empty
    /// and [`TaskServiceError::Repository`] when the store rejects the
    /// write.
    pub fn update_task(&self, request: UpdateTaskRequest) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(request.id)? else {
            return Ok(None);
        };

        if let Some(title) = request.title {
            task.rename(TaskTitle::new(title)?, &*self.clock);
        }
        if let Some(description) = request.description {
            task.set_description(description, &*self.clock);
        }

        let updated = self.repository.update(&task)?;
        tracing::debug!(id = %request.id, "task updated");
        Ok(updated)
    }

    /// Deletes a task by identifier.
    ///
    /// Returns `Ok(false)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store rejects the
    /// removal.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        let deleted = self.repository.delete(id)?;
        tracing::debug!(id = %id, deleted, "task delete requested");
        Ok(deleted)
    }

    /// Marks a task as complete. Idempotent.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store rejects the
    /// write.
    pub fn mark_task_complete(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.transition(id, TaskStatus::Complete)
    }

    /// Marks a task as incomplete. Idempotent.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store rejects the
    /// write.
    pub fn mark_task_incomplete(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.transition(id, TaskStatus::Incomplete)
    }

    /// Fetches a task, moves it to the target status, and writes it back.
    fn transition(&self, id: TaskId, target: TaskStatus) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id)? else {
            return Ok(None);
        };
        match target {
            TaskStatus::Complete => task.mark_complete(&*self.clock),
            TaskStatus::Incomplete => task.mark_incomplete(&*self.clock),
        }
        let updated = self.repository.update(&task)?;
        tracing::debug!(id = %id, status = ?task.status(), "task status changed");
        Ok(updated)
    }
}

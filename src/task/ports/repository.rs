//! Repository port for task persistence, lookup, and paged listing.

use crate::task::domain::{Pagination, Task, TaskId, TaskQuery};
use crate::user::domain::UserSummary;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// A task enriched with the partial projection of its assignee.
///
/// The projection is present exactly when the task has an assignee that
/// exists in the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithAssignee {
    /// The task record.
    pub task: Task,
    /// Partial view of the assigned user, if any.
    pub assignee: Option<UserSummary>,
}

/// One page of a task listing plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page, in the requested order.
    pub items: Vec<TaskWithAssignee>,
    /// Metadata computed over the filtered set before pagination.
    pub pagination: Pagination,
}

/// Task persistence contract.
///
/// Soft-deleted tasks stay in storage but are invisible to every operation
/// here except the insert that created them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing, non-deleted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist or has been soft-deleted.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a non-deleted task by identifier, with its assignee
    /// projection.
    ///
    /// Returns `None` when no non-deleted task has the identifier.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskWithAssignee>>;

    /// Marks a task as deleted at the given time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist or is already soft-deleted.
    async fn soft_delete(&self, id: TaskId, deleted_at: DateTime<Utc>) -> TaskRepositoryResult<()>;

    /// Returns one page of the filtered, sorted task listing.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<TaskPage>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found or is soft-deleted.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

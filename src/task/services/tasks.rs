//! Service layer for task creation, mutation, lookup, and listing.

use crate::task::{
    domain::{
        NewTask, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskQuery, TaskStatus,
        TaskTitle,
    },
    ports::{TaskPage, TaskRepository, TaskRepositoryError, TaskWithAssignee},
};
use crate::user::{
    domain::{UserId, UserSummary},
    ports::{UserDirectory, UserDirectoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// The status is supplied as a raw string and parsed by the service so an
/// invalid literal is rejected as a validation error before the state
/// machine is involved; a missing status defaults to `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
    assigned_to: Option<UserId>,
    completed_in: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            assigned_to: None,
            completed_in: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status from a raw parameter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn assigned_to(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Sets an explicit completion timestamp.
    #[must_use]
    pub const fn with_completed_in(mut self, completed_in: DateTime<Utc>) -> Self {
        self.completed_in = Some(completed_in);
        self
    }
}

/// Request payload for a partial task update.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    assigned_to: Option<UserId>,
    completed_in: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Requests a status change, supplied as a raw parameter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub const fn assigned_to(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Sets an explicit completion timestamp.
    ///
    /// Applied before any status change in the same request, so the
    /// caller's value wins over automatic stamping. The timestamp may also
    /// be recorded while the status stays `pending` or `in_progress`.
    #[must_use]
    pub const fn with_completed_in(mut self, completed_in: DateTime<Utc>) -> Self {
        self.completed_in = Some(completed_in);
        self
    }
}

/// Caller-visible outcome classes for failed task operations.
///
/// An embedding transport maps these to its own status vocabulary
/// (validation: 400, not-found: 404, internal: 500).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    /// The input or requested transition was invalid.
    Validation,
    /// The task does not exist or is soft-deleted.
    NotFound,
    /// An unexpected persistence failure, logged and propagated.
    Internal,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The supplied status literal is not a valid status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The requested assignee does not exist.
    #[error("assigned user does not exist: {0}")]
    UnknownAssignee(UserId),

    /// The task does not exist or is soft-deleted.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Task persistence failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),

    /// User directory lookup failed.
    #[error(transparent)]
    Directory(UserDirectoryError),
}

impl TaskServiceError {
    /// Returns the caller-visible outcome class for this error.
    #[must_use]
    pub const fn classification(&self) -> ErrorClassification {
        match self {
            Self::Domain(_) | Self::InvalidStatus(_) | Self::UnknownAssignee(_) => {
                ErrorClassification::Validation
            }
            Self::NotFound(_) => ErrorClassification::NotFound,
            Self::Repository(_) | Self::Directory(_) => ErrorClassification::Internal,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Mutations pass through the state machine before persistence; queries
/// pass through to the repository's query surface.
#[derive(Clone)]
pub struct TaskService<R, U, C>
where
    R: TaskRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> TaskService<R, U, C>
where
    R: TaskRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Creates a new task.
    ///
    /// A task created directly as `completed` without an explicit
    /// completion timestamp is stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns a validation-class [`TaskServiceError`] for an invalid
    /// title, status literal, or unknown assignee, and an internal-class
    /// error when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskWithAssignee> {
        let title = TaskTitle::new(request.title)?;
        let status = request
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or(TaskStatus::Pending);
        let assignee = self.resolve_assignee(request.assigned_to).await?;

        let task = Task::new(
            NewTask {
                title,
                description: request.description,
                status,
                assigned_to: request.assigned_to,
                completed_in: request.completed_in,
            },
            &*self.clock,
        );
        self.repository
            .insert(&task)
            .await
            .map_err(|err| map_repository_error("create", Some(task.id()), err))?;

        Ok(TaskWithAssignee { task, assignee })
    }

    /// Applies a partial update to an existing task.
    ///
    /// Every status change is re-validated against the transition table; a
    /// completed task's status may never change to anything else.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing or
    /// soft-deleted, a validation-class error for invalid input or a
    /// rejected transition, and an internal-class error when persistence
    /// fails.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskWithAssignee> {
        let record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("update", Some(id), err))?
            .ok_or(TaskServiceError::NotFound(id))?;
        let mut task = record.task;
        let mut assignee = record.assignee;

        if let Some(raw_title) = request.title {
            task.rename(TaskTitle::new(raw_title)?, &*self.clock);
        }
        if let Some(description) = request.description {
            task.set_description(description, &*self.clock);
        }
        if let Some(user_id) = request.assigned_to {
            assignee = self.resolve_assignee(Some(user_id)).await?;
            task.assign_to(user_id, &*self.clock);
        }
        // Explicit completion timestamps apply before the status change so
        // stamping never overrides a caller-supplied value.
        if let Some(completed_in) = request.completed_in {
            task.set_completed_in(completed_in, &*self.clock);
        }
        if let Some(raw_status) = request.status {
            let status = TaskStatus::try_from(raw_status.as_str())?;
            task.change_status(status, &*self.clock)?;
        }

        self.repository
            .update(&task)
            .await
            .map_err(|err| map_repository_error("update", Some(id), err))?;

        Ok(TaskWithAssignee { task, assignee })
    }

    /// Soft-deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing or
    /// already deleted, and an internal-class error when persistence
    /// fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository
            .soft_delete(id, self.clock.utc())
            .await
            .map_err(|err| map_repository_error("delete", Some(id), err))
    }

    /// Finds a non-deleted task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no non-deleted task has
    /// the identifier, and an internal-class error when persistence fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<TaskWithAssignee> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("find_by_id", Some(id), err))?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Returns one page of the filtered, sorted task listing.
    ///
    /// # Errors
    ///
    /// Returns an internal-class error when persistence fails.
    pub async fn list(&self, query: &TaskQuery) -> TaskServiceResult<TaskPage> {
        self.repository
            .list(query)
            .await
            .map_err(|err| map_repository_error("list", None, err))
    }

    async fn resolve_assignee(
        &self,
        assigned_to: Option<UserId>,
    ) -> TaskServiceResult<Option<UserSummary>> {
        let Some(user_id) = assigned_to else {
            return Ok(None);
        };
        let summary = self.directory.find_summary(user_id).await.map_err(|err| {
            tracing::error!(user_id = %user_id, error = %err, "user directory lookup failed");
            TaskServiceError::Directory(err)
        })?;
        summary.map_or(Err(TaskServiceError::UnknownAssignee(user_id)), |found| {
            Ok(Some(found))
        })
    }
}

/// Maps a repository error, logging unexpected persistence failures with
/// their operation context before propagating them unchanged.
fn map_repository_error(
    operation: &'static str,
    id: Option<TaskId>,
    err: TaskRepositoryError,
) -> TaskServiceError {
    match err {
        TaskRepositoryError::NotFound(task_id) => TaskServiceError::NotFound(task_id),
        other => {
            tracing::error!(operation, task_id = ?id, error = %other, "task persistence failure");
            TaskServiceError::Repository(other)
        }
    }
}

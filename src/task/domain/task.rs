//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// All mutations go through methods that enforce the status state machine
/// and keep `completed_in` consistent with the lifecycle. Completion
/// stamping happens inside the same mutation that changes the status, so no
/// intermediate `Completed`-without-timestamp state can reach persistence
/// unless the caller explicitly supplied their own timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    assigned_to: Option<UserId>,
    completed_in: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Validated task title.
    pub title: TaskTitle,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Optional assignee; existence checks happen in the service layer.
    pub assigned_to: Option<UserId>,
    /// Optional explicit completion timestamp.
    pub completed_in: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted completion timestamp, if any.
    pub completed_in: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-delete marker, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task from caller-supplied fields.
    ///
    /// A task created directly as [`TaskStatus::Completed`] without an
    /// explicit completion timestamp is stamped with the current clock
    /// time, mirroring the update path.
    #[must_use]
    pub fn new(fields: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let completed_in = match (fields.status, fields.completed_in) {
            (TaskStatus::Completed, None) => Some(timestamp),
            (_, supplied) => supplied,
        };

        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            assigned_to: fields.assigned_to,
            completed_in,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            assigned_to: data.assigned_to,
            completed_in: data.completed_in,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_in(&self) -> Option<DateTime<Utc>> {
        self.completed_in
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-delete marker, if any.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether a change to `target` is permitted from the current
    /// status.
    #[must_use]
    pub fn can_transition_to(&self, target: TaskStatus) -> bool {
        self.status.can_transition_to(target)
    }

    /// Changes the lifecycle status.
    ///
    /// A request for the current status is accepted as a no-op. A change to
    /// [`TaskStatus::Completed`] stamps `completed_in` with the current
    /// clock time unless a value is already present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskImmutable`] when the task is
    /// completed and a different status is requested, and
    /// [`TaskDomainError::InvalidStatusTransition`] when the transition
    /// table rejects the change.
    pub fn change_status(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        // The terminal guard runs before the table so callers get the more
        // specific message.
        if self.status == TaskStatus::Completed && target != TaskStatus::Completed {
            return Err(TaskDomainError::CompletedTaskImmutable(self.id));
        }
        if target == self.status {
            return Ok(());
        }
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }

        self.status = target;
        if target == TaskStatus::Completed && self.completed_in.is_none() {
            self.completed_in = Some(clock.utc());
        }
        self.touch(clock);
        Ok(())
    }

    /// Replaces the task title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = Some(description.into());
        self.touch(clock);
    }

    /// Replaces the assignee. Existence checks happen in the service layer.
    pub fn assign_to(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.touch(clock);
    }

    /// Sets an explicit completion timestamp.
    ///
    /// The status is deliberately left untouched: a completion date may be
    /// recorded ahead of the status reaching [`TaskStatus::Completed`].
    pub fn set_completed_in(&mut self, completed_in: DateTime<Utc>, clock: &impl Clock) {
        self.completed_in = Some(completed_in);
        self.touch(clock);
    }

    /// Marks the task as soft-deleted at the given time.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

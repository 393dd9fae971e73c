//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title has {0} characters, exceeds limit of 255")]
    TitleTooLong(usize),

    /// The task is completed and its status may no longer change.
    #[error("task {0} is completed and its status can no longer change")]
    CompletedTaskImmutable(TaskId),

    /// The requested status change is not in the transition table.
    #[error("cannot change status from '{}' to '{}'", .from.label(), .to.label())]
    InvalidStatusTransition {
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the caller requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from untrusted input or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

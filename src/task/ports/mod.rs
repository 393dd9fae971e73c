//! Port contracts for the task module.

mod repository;

pub use repository::{
    TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskWithAssignee,
};

//! Domain model for task lifecycle management.
//!
//! The task domain models the status state machine, validated task fields,
//! soft deletion, and the query/pagination vocabulary, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod query;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{Pagination, SortField, SortOrder, TaskFilter, TaskQuery};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;

//! In-memory adapter integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_lifecycle_tests`: creation, status changes, soft deletion
//! - `task_query_tests`: filtering, sorting, pagination, assignee projection

mod in_memory {
    pub mod helpers;

    mod task_lifecycle_tests;
    mod task_query_tests;
}

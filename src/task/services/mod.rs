//! Orchestration services for the task module.

mod tasks;

pub use tasks::{
    CreateTaskRequest, ErrorClassification, TaskService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};

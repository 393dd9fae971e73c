//! Shared test helpers for in-memory adapter integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use warboard::task::{
    adapters::memory::InMemoryTaskRepository,
    ports::TaskWithAssignee,
    services::{CreateTaskRequest, TaskService},
};
use warboard::user::{adapters::memory::InMemoryUserDirectory, domain::User};

/// Service wired to in-memory adapters.
pub type TestService = TaskService<InMemoryTaskRepository, InMemoryUserDirectory, DefaultClock>;

/// A service plus the directory it resolves assignees against.
pub struct TestHarness {
    /// User directory shared by the service and the repository.
    pub directory: Arc<InMemoryUserDirectory>,
    /// Task service under test.
    pub service: TestService,
}

/// Provides a fresh service and directory for each test.
#[fixture]
pub fn harness() -> TestHarness {
    let directory = Arc::new(InMemoryUserDirectory::new());
    let repository = Arc::new(InMemoryTaskRepository::new(Arc::clone(&directory)));
    let service = TaskService::new(repository, Arc::clone(&directory), Arc::new(DefaultClock));
    TestHarness { directory, service }
}

/// Registers a user and returns the stored record.
pub fn register_user(directory: &InMemoryUserDirectory, name: &str, email: &str) -> User {
    let user = User::new(name, email).expect("valid user");
    directory.register(user.clone()).expect("registration");
    user
}

/// Creates `count` tasks titled `Task 01` through `Task NN` so title-sorted
/// listings have a deterministic order.
pub async fn seed_numbered_tasks(service: &TestService, count: u32) -> Vec<TaskWithAssignee> {
    let mut created = Vec::new();
    for number in 1..=count {
        let task = service
            .create(CreateTaskRequest::new(format!("Task {number:02}")))
            .await
            .expect("seed task creation should succeed");
        created.push(task);
    }
    created
}

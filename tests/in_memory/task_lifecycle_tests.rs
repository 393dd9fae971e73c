//! In-memory integration tests for task lifecycle operations.

use crate::in_memory::helpers::{TestHarness, harness, register_user};
use rstest::rstest;
use warboard::task::{
    domain::{TaskQuery, TaskStatus},
    services::{CreateTaskRequest, ErrorClassification, TaskServiceError, UpdateTaskRequest},
};

/// Tests a full create, start, complete walk through the status machine.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_from_pending_to_completed(harness: TestHarness) {
    let created = harness
        .service
        .create(
            CreateTaskRequest::new("Restore uplink to the forward post")
                .with_description("Mast damaged in the storm"),
        )
        .await
        .expect("task creation should succeed");
    assert_eq!(created.task.status(), TaskStatus::Pending);
    let id = created.task.id();

    let started = harness
        .service
        .update(id, UpdateTaskRequest::new().with_status("in_progress"))
        .await
        .expect("start should succeed");
    assert_eq!(started.task.status(), TaskStatus::InProgress);
    assert!(started.task.completed_in().is_none());

    let completed = harness
        .service
        .update(id, UpdateTaskRequest::new().with_status("completed"))
        .await
        .expect("completion should succeed");
    assert_eq!(completed.task.status(), TaskStatus::Completed);
    assert!(completed.task.completed_in().is_some());
}

/// Tests that a completed task rejects any further status change and the
/// stored record stays untouched.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_cannot_be_reopened(harness: TestHarness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new("Close out the incident").with_status("completed"))
        .await
        .expect("task creation should succeed");
    let id = created.task.id();
    let stamped = created.task.completed_in();

    let result = harness
        .service
        .update(id, UpdateTaskRequest::new().with_status("in_progress"))
        .await;
    let Err(error) = result else {
        panic!("expected a rejected transition");
    };
    assert_eq!(error.classification(), ErrorClassification::Validation);

    let stored = harness
        .service
        .find_by_id(id)
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.task.status(), TaskStatus::Completed);
    assert_eq!(stored.task.completed_in(), stamped);
}

/// Tests that non-status fields of a completed task stay editable.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_still_accepts_field_edits(harness: TestHarness) {
    let user = register_user(&harness.directory, "Noor Haddad", "noor@example.com");
    let created = harness
        .service
        .create(CreateTaskRequest::new("Write the debrief").with_status("completed"))
        .await
        .expect("task creation should succeed");

    let updated = harness
        .service
        .update(
            created.task.id(),
            UpdateTaskRequest::new()
                .with_title("Write and circulate the debrief")
                .assigned_to(user.id()),
        )
        .await
        .expect("field edit should succeed");

    assert_eq!(updated.task.status(), TaskStatus::Completed);
    assert_eq!(updated.task.title().as_str(), "Write and circulate the debrief");
    assert_eq!(updated.assignee, Some(user.summary()));
}

/// Tests that soft deletion hides the task from lookups, listings, and
/// further mutation.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_deleted_task_disappears_everywhere(harness: TestHarness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new("Decommission the relay"))
        .await
        .expect("task creation should succeed");
    let id = created.task.id();

    harness.service.delete(id).await.expect("delete should succeed");

    let lookup = harness.service.find_by_id(id).await;
    assert!(matches!(lookup, Err(TaskServiceError::NotFound(_))));

    let update = harness
        .service
        .update(id, UpdateTaskRequest::new().with_title("Recommission the relay"))
        .await;
    assert!(matches!(update, Err(TaskServiceError::NotFound(_))));

    let page = harness
        .service
        .list(&TaskQuery::new())
        .await
        .expect("listing should succeed");
    assert_eq!(page.pagination.total, 0);
    assert!(page.items.is_empty());
}

/// Tests that a second delete of the same task reports not-found.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_delete_reports_not_found(harness: TestHarness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new("One-shot task"))
        .await
        .expect("task creation should succeed");
    let id = created.task.id();

    harness.service.delete(id).await.expect("delete should succeed");
    let second = harness.service.delete(id).await;

    let Err(error) = second else {
        panic!("expected the second delete to fail");
    };
    assert!(matches!(error, TaskServiceError::NotFound(task_id) if task_id == id));
    assert_eq!(error.classification(), ErrorClassification::NotFound);
}

/// Tests that reassignment validates the new assignee against the
/// directory.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_replaces_the_projection(harness: TestHarness) {
    let first = register_user(&harness.directory, "Avery Quinn", "avery@example.com");
    let second = register_user(&harness.directory, "Noor Haddad", "noor@example.com");
    let created = harness
        .service
        .create(CreateTaskRequest::new("Rotate the watch").assigned_to(first.id()))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.assignee, Some(first.summary()));

    let updated = harness
        .service
        .update(
            created.task.id(),
            UpdateTaskRequest::new().assigned_to(second.id()),
        )
        .await
        .expect("reassignment should succeed");

    assert_eq!(updated.task.assigned_to(), Some(second.id()));
    assert_eq!(updated.assignee, Some(second.summary()));
}

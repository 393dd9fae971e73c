//! In-memory integration tests for the task query engine.

use crate::in_memory::helpers::{TestHarness, harness, register_user, seed_numbered_tasks};
use rstest::rstest;
use warboard::task::{
    domain::{TaskFilter, TaskQuery, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

/// Tests combining a status filter with a case-insensitive title filter.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_title_filters_combine_with_and(harness: TestHarness) {
    harness
        .service
        .create(CreateTaskRequest::new("Repair the NORTH antenna"))
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create(CreateTaskRequest::new("Repair the south antenna").with_status("in_progress"))
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create(CreateTaskRequest::new("Paint the north fence").with_status("in_progress"))
        .await
        .expect("task creation should succeed");

    let query = TaskQuery::new().with_filter(
        TaskFilter::new()
            .with_title("north")
            .with_status(TaskStatus::InProgress),
    );
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert_eq!(page.pagination.total, 1);
    assert_eq!(
        page.items.first().map(|item| item.task.title().as_str()),
        Some("Paint the north fence")
    );
}

/// Tests the case-insensitive description filter.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn description_filter_matches_substrings(harness: TestHarness) {
    harness
        .service
        .create(
            CreateTaskRequest::new("Check the generator")
                .with_description("Fuel gauge reads EMPTY after refill"),
        )
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create(CreateTaskRequest::new("Check the pump"))
        .await
        .expect("task creation should succeed");

    let query =
        TaskQuery::new().with_filter(TaskFilter::new().with_description("fuel gauge"));
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert_eq!(page.pagination.total, 1);
    assert_eq!(
        page.items.first().map(|item| item.task.title().as_str()),
        Some("Check the generator")
    );
}

/// Tests that the assignee filter returns only that user's tasks, each
/// carrying the partial user projection.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_filter_returns_projected_tasks(harness: TestHarness) {
    let avery = register_user(&harness.directory, "Avery Quinn", "avery@example.com");
    let noor = register_user(&harness.directory, "Noor Haddad", "noor@example.com");
    harness
        .service
        .create(CreateTaskRequest::new("Stock the infirmary").assigned_to(avery.id()))
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create(CreateTaskRequest::new("Stock the armoury").assigned_to(noor.id()))
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create(CreateTaskRequest::new("Unassigned chore"))
        .await
        .expect("task creation should succeed");

    let query = TaskQuery::new().with_filter(TaskFilter::new().with_assignee(avery.id()));
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert_eq!(page.pagination.total, 1);
    let item = page.items.first().expect("one item");
    assert_eq!(item.task.assigned_to(), Some(avery.id()));
    let summary = item.assignee.as_ref().expect("assignee projection");
    assert_eq!(summary.id, avery.id());
    assert_eq!(summary.name, "Avery Quinn");
    assert_eq!(summary.email, "avery@example.com");
}

/// Tests sorting by title ascending.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_sort_orders_alphabetically(harness: TestHarness) {
    for title in ["Bravo task", "alpha task", "Charlie task"] {
        harness
            .service
            .create(CreateTaskRequest::new(title))
            .await
            .expect("task creation should succeed");
    }

    let query = TaskQuery::new().sort_by("title").order_by("asc");
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = page
        .items
        .iter()
        .map(|item| item.task.title().as_str())
        .collect();
    assert_eq!(titles, vec!["alpha task", "Bravo task", "Charlie task"]);
}

/// Tests that unknown sort parameters silently resolve to the same
/// ordering as an explicit `created_at desc` listing.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_parameter_falls_back_to_newest_first(harness: TestHarness) {
    seed_numbered_tasks(&harness.service, 5).await;

    let fallback = harness
        .service
        .list(&TaskQuery::new().sort_by("priority").order_by("sideways"))
        .await
        .expect("listing should succeed");
    let explicit = harness
        .service
        .list(&TaskQuery::new().sort_by("created_at").order_by("desc"))
        .await
        .expect("listing should succeed");

    let fallback_ids: Vec<_> = fallback.items.iter().map(|item| item.task.id()).collect();
    let explicit_ids: Vec<_> = explicit.items.iter().map(|item| item.task.id()).collect();
    assert_eq!(fallback_ids, explicit_ids);
    assert_eq!(fallback.pagination.total, 5);
}

/// Tests the second page of a filtered, title-sorted listing: 25 matching
/// tasks plus decoys that the filter must exclude from the total.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_page_of_a_filtered_sorted_listing(harness: TestHarness) {
    seed_numbered_tasks(&harness.service, 25).await;
    for number in 1..=5 {
        harness
            .service
            .create(CreateTaskRequest::new(format!("Decoy {number:02}")))
            .await
            .expect("decoy creation should succeed");
    }

    let query = TaskQuery::new()
        .with_filter(TaskFilter::new().with_title("task"))
        .sort_by("title")
        .order_by("asc")
        .with_page(2)
        .with_per_page(10);
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = page
        .items
        .iter()
        .map(|item| item.task.title().as_str())
        .collect();
    let expected: Vec<String> = (11..=20).map(|number| format!("Task {number}")).collect();
    assert_eq!(titles, expected);
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.per_page, 10);
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.last_page, 3);
    assert_eq!(page.pagination.from, Some(11));
    assert_eq!(page.pagination.to, Some(20));
}

/// Tests that a page past the end of the result set yields an empty item
/// list rather than an error.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_past_the_end_is_empty_not_an_error(harness: TestHarness) {
    seed_numbered_tasks(&harness.service, 3).await;

    let query = TaskQuery::new().with_page(5).with_per_page(10);
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.current_page, 5);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.last_page, 1);
    assert_eq!(page.pagination.from, None);
    assert_eq!(page.pagination.to, None);
}

/// Tests that an extreme page number resolves to an empty page rather
/// than overflowing the offset arithmetic.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn extreme_page_number_yields_an_empty_page(harness: TestHarness) {
    seed_numbered_tasks(&harness.service, 3).await;

    let query = TaskQuery::new().with_page(i64::MAX).with_per_page(100);
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.from, None);
    assert_eq!(page.pagination.to, None);
}

/// Tests that an oversized page size is clamped rather than honoured.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oversized_per_page_is_clamped(harness: TestHarness) {
    seed_numbered_tasks(&harness.service, 5).await;

    let query = TaskQuery::new().with_per_page(500);
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert_eq!(page.pagination.per_page, 100);
    assert_eq!(page.items.len(), 5);
}

/// Tests that completed tasks keep their completion stamp through the
/// listing projection.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_carries_completion_stamps(harness: TestHarness) {
    let created = harness
        .service
        .create(CreateTaskRequest::new("Finish the ledger"))
        .await
        .expect("task creation should succeed");
    harness
        .service
        .update(
            created.task.id(),
            UpdateTaskRequest::new().with_status("completed"),
        )
        .await
        .expect("completion should succeed");

    let query = TaskQuery::new().with_filter(TaskFilter::new().with_status(TaskStatus::Completed));
    let page = harness
        .service
        .list(&query)
        .await
        .expect("listing should succeed");

    assert_eq!(page.pagination.total, 1);
    let item = page.items.first().expect("one item");
    assert_eq!(item.task.status(), TaskStatus::Completed);
    assert!(item.task.completed_in().is_some());
}

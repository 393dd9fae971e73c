//! In-memory task repository with full filter/sort/pagination support.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Pagination, SortField, SortOrder, Task, TaskFilter, TaskId, TaskQuery},
    ports::{TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskWithAssignee},
};
use crate::user::{adapters::memory::InMemoryUserDirectory, ports::UserDirectory};

/// Thread-safe in-memory task repository.
///
/// Assignee projections are resolved against an [`InMemoryUserDirectory`],
/// the in-memory stand-in for the users table.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
    directory: Arc<InMemoryUserDirectory>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository resolving assignees against the given
    /// directory.
    #[must_use]
    pub fn new(directory: Arc<InMemoryUserDirectory>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            directory,
        }
    }

    async fn project(&self, task: Task) -> TaskRepositoryResult<TaskWithAssignee> {
        let assignee = match task.assigned_to() {
            Some(user_id) => self
                .directory
                .find_summary(user_id)
                .await
                .map_err(TaskRepositoryError::persistence)?,
            None => None,
        };
        Ok(TaskWithAssignee { task, assignee })
    }

    async fn project_all(&self, tasks: Vec<Task>) -> TaskRepositoryResult<Vec<TaskWithAssignee>> {
        let mut items = Vec::with_capacity(tasks.len());
        for task in tasks {
            items.push(self.project(task).await?);
        }
        Ok(items)
    }
}

fn lock_error(message: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(message.to_string()))
}

fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    let title_matches = filter.title().is_none_or(|needle| {
        task.title()
            .as_str()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    });
    let description_matches = filter.description().is_none_or(|needle| {
        task.description()
            .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase()))
    });
    let status_matches = filter.status().is_none_or(|status| task.status() == status);
    let assignee_matches = filter
        .assigned_to()
        .is_none_or(|user_id| task.assigned_to() == Some(user_id));

    title_matches && description_matches && status_matches && assignee_matches
}

fn compare_by_field(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Title => a
            .title()
            .as_str()
            .to_lowercase()
            .cmp(&b.title().as_str().to_lowercase()),
        SortField::Status => a.status().as_str().cmp(b.status().as_str()),
        SortField::AssignedTo => a.assigned_to().cmp(&b.assigned_to()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

fn page_bounds(query: &TaskQuery) -> (usize, usize) {
    let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
    let per_page = usize::try_from(query.per_page()).unwrap_or(usize::MAX);
    (offset, per_page)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if stored.is_deleted() {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskWithAssignee>> {
        let task = {
            let state = self.state.read().map_err(lock_error)?;
            state
                .get(&id)
                .filter(|stored| !stored.is_deleted())
                .cloned()
        };
        let Some(found) = task else {
            return Ok(None);
        };
        Ok(Some(self.project(found).await?))
    }

    async fn soft_delete(&self, id: TaskId, deleted_at: DateTime<Utc>) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state.get_mut(&id).ok_or(TaskRepositoryError::NotFound(id))?;
        if stored.is_deleted() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        stored.mark_deleted(deleted_at);
        Ok(())
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<TaskPage> {
        let mut matching: Vec<Task> = {
            let state = self.state.read().map_err(lock_error)?;
            state
                .values()
                .filter(|task| !task.is_deleted() && matches_filter(task, query.filter()))
                .cloned()
                .collect()
        };

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        matching.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, query.sort());
            match query.order() {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let (offset, per_page) = page_bounds(query);
        let page: Vec<Task> = matching.into_iter().skip(offset).take(per_page).collect();
        let pagination = Pagination::compute(query, total, page.len());
        let items = self.project_all(page).await?;

        Ok(TaskPage { items, pagination })
    }
}

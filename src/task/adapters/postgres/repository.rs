//! `PostgreSQL` repository implementation for task storage and listing.

use super::{
    models::{AssigneeRow, NewTaskRow, TaskChangeset, TaskRow},
    schema::{tasks, users},
};
use crate::task::{
    domain::{
        Pagination, PersistedTaskData, SortField, SortOrder, Task, TaskFilter, TaskId, TaskQuery,
        TaskStatus, TaskTitle,
    },
    ports::{TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskWithAssignee},
};
use crate::user::domain::{UserId, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table
                    .find(task_id.into_inner())
                    .filter(tasks::deleted_at.is_null()),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskWithAssignee>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .filter(tasks::deleted_at.is_null())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;

            let Some(found) = row else {
                return Ok(None);
            };
            let summaries = load_summaries(connection, found.assigned_to.into_iter().collect())?;
            row_to_item(found, &summaries).map(Some)
        })
        .await
    }

    async fn soft_delete(&self, id: TaskId, deleted_at: DateTime<Utc>) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table
                    .find(id.into_inner())
                    .filter(tasks::deleted_at.is_null()),
            )
            .set((
                tasks::deleted_at.eq(Some(deleted_at)),
                tasks::updated_at.eq(deleted_at),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<TaskPage> {
        let listing = query.clone();

        self.run_blocking(move |connection| {
            let total: i64 = filtered(listing.filter())
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let rows: Vec<TaskRow> = ordered(filtered(listing.filter()), listing.sort(), listing.order())
                .limit(to_sql_count(listing.per_page()))
                .offset(to_sql_count(listing.offset()))
                .load(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let assignee_ids: Vec<uuid::Uuid> =
                rows.iter().filter_map(|row| row.assigned_to).collect();
            let summaries = load_summaries(connection, assignee_ids)?;

            let items = rows
                .into_iter()
                .map(|row| row_to_item(row, &summaries))
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            let pagination =
                Pagination::compute(&listing, u64::try_from(total).unwrap_or(0), items.len());

            Ok(TaskPage { items, pagination })
        })
        .await
    }
}

/// Builds the filtered, non-deleted base query.
fn filtered(filter: &TaskFilter) -> tasks::BoxedQuery<'static, Pg> {
    let mut query = tasks::table
        .into_boxed()
        .filter(tasks::deleted_at.is_null());
    if let Some(title) = filter.title() {
        query = query.filter(tasks::title.ilike(like_pattern(title)));
    }
    if let Some(description) = filter.description() {
        query = query.filter(tasks::description.ilike(like_pattern(description)));
    }
    if let Some(status) = filter.status() {
        query = query.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(user_id) = filter.assigned_to() {
        query = query.filter(tasks::assigned_to.eq(user_id.into_inner()));
    }
    query
}

fn ordered(
    query: tasks::BoxedQuery<'static, Pg>,
    sort: SortField,
    order: SortOrder,
) -> tasks::BoxedQuery<'static, Pg> {
    match (sort, order) {
        (SortField::Title, SortOrder::Asc) => query.order(tasks::title.asc()),
        (SortField::Title, SortOrder::Desc) => query.order(tasks::title.desc()),
        (SortField::Status, SortOrder::Asc) => query.order(tasks::status.asc()),
        (SortField::Status, SortOrder::Desc) => query.order(tasks::status.desc()),
        (SortField::AssignedTo, SortOrder::Asc) => query.order(tasks::assigned_to.asc()),
        (SortField::AssignedTo, SortOrder::Desc) => query.order(tasks::assigned_to.desc()),
        (SortField::CreatedAt, SortOrder::Asc) => query.order(tasks::created_at.asc()),
        (SortField::CreatedAt, SortOrder::Desc) => query.order(tasks::created_at.desc()),
        (SortField::UpdatedAt, SortOrder::Asc) => query.order(tasks::updated_at.asc()),
        (SortField::UpdatedAt, SortOrder::Desc) => query.order(tasks::updated_at.desc()),
    }
}

fn like_pattern(needle: &str) -> String {
    format!("%{needle}%")
}

fn to_sql_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn load_summaries(
    connection: &mut PgConnection,
    ids: Vec<uuid::Uuid>,
) -> TaskRepositoryResult<HashMap<uuid::Uuid, UserSummary>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<AssigneeRow> = users::table
        .filter(users::id.eq_any(ids))
        .select(AssigneeRow::as_select())
        .load(connection)
        .map_err(TaskRepositoryError::persistence)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.id,
                UserSummary {
                    id: UserId::from_uuid(row.id),
                    name: row.name,
                    email: row.email,
                },
            )
        })
        .collect())
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        assigned_to: task.assigned_to().map(UserId::into_inner),
        completed_in: task.completed_in(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        assigned_to: task.assigned_to().map(UserId::into_inner),
        completed_in: task.completed_in(),
        updated_at: task.updated_at(),
    }
}

fn row_to_item(
    row: TaskRow,
    summaries: &HashMap<uuid::Uuid, UserSummary>,
) -> TaskRepositoryResult<TaskWithAssignee> {
    let assignee = row
        .assigned_to
        .and_then(|user_id| summaries.get(&user_id).cloned());
    let task = row_to_task(row)?;
    Ok(TaskWithAssignee { task, assignee })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title,
        description: row.description,
        status,
        assigned_to: row.assigned_to.map(UserId::from_uuid),
        completed_in: row.completed_in,
        created_at: row.created_at,
        updated_at: row.updated_at,
        deleted_at: row.deleted_at,
    };
    Ok(Task::from_persisted(data))
}

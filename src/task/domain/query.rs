//! Query vocabulary for filtered, sorted, paginated task listings.

use super::TaskStatus;
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// Default number of items per page.
const DEFAULT_PER_PAGE: u64 = 20;

/// Largest permitted number of items per page.
const MAX_PER_PAGE: u64 = 100;

/// Optional filters combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    assigned_to: Option<UserId>,
}

impl TaskFilter {
    /// Creates an empty filter matching every non-deleted task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to titles containing the given substring,
    /// case-insensitively.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Restricts results to descriptions containing the given substring,
    /// case-insensitively.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restricts results to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to tasks assigned to the given user.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Returns the title substring filter, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description substring filter, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the assignee filter, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }
}

/// Fields a task listing may be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Sort by title.
    Title,
    /// Sort by status storage form.
    Status,
    /// Sort by assignee identifier.
    AssignedTo,
    /// Sort by creation timestamp (the default).
    #[default]
    CreatedAt,
    /// Sort by latest mutation timestamp.
    UpdatedAt,
}

impl SortField {
    /// Resolves a caller-supplied sort parameter.
    ///
    /// Unrecognised values silently fall back to [`Self::CreatedAt`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "status" => Self::Status,
            "assigned_to" => Self::AssignedTo,
            "updated_at" => Self::UpdatedAt,
            _ => Self::CreatedAt,
        }
    }
}

/// Sort direction for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Resolves a caller-supplied order parameter, case-insensitively.
    ///
    /// Unrecognised values silently fall back to [`Self::Desc`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// A complete listing request: filters, sort, and pagination.
///
/// Pagination inputs are resolved at construction time: `per_page` is
/// clamped to `[1, 100]` with non-positive or missing values falling back
/// to the default of 20, and `page` is at least 1. A page past the end of
/// the result set is not an error; it yields an empty item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    filter: TaskFilter,
    sort: SortField,
    order: SortOrder,
    page: Option<u64>,
    per_page: Option<u64>,
}

impl TaskQuery {
    /// Creates a query with no filters, default sort (`created_at`
    /// descending), and default pagination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filters.
    #[must_use]
    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sort field from a raw parameter, with silent fallback.
    #[must_use]
    pub fn sort_by(mut self, value: &str) -> Self {
        self.sort = SortField::from_param(value);
        self
    }

    /// Sets the sort order from a raw parameter, with silent fallback.
    #[must_use]
    pub fn order_by(mut self, value: &str) -> Self {
        self.order = SortOrder::from_param(value);
        self
    }

    /// Sets the requested page number.
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = u64::try_from(page).ok().filter(|value| *value >= 1);
        self
    }

    /// Sets the requested number of items per page.
    #[must_use]
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = u64::try_from(per_page).ok().filter(|value| *value >= 1);
        self
    }

    /// Returns the filters.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the resolved sort field.
    #[must_use]
    pub const fn sort(&self) -> SortField {
        self.sort
    }

    /// Returns the resolved sort order.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the resolved page number, at least 1.
    #[must_use]
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    /// Returns the resolved page size, within `[1, 100]`.
    #[must_use]
    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).min(MAX_PER_PAGE)
    }

    /// Returns the number of records to skip before the requested page.
    ///
    /// Saturates rather than overflowing: the page number has no upper
    /// bound, and a page past the end must resolve to an empty listing.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page().saturating_sub(1).saturating_mul(self.per_page())
    }
}

/// Pagination metadata for a task listing, computed over the filtered set
/// before pagination is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page that was returned.
    pub current_page: u64,
    /// One-based index of the first returned item, absent on an empty page.
    pub from: Option<u64>,
    /// Last page with content, at least 1.
    pub last_page: u64,
    /// Page size the listing was computed with.
    pub per_page: u64,
    /// One-based index of the last returned item, absent on an empty page.
    pub to: Option<u64>,
    /// Total number of records matching the filters.
    pub total: u64,
}

impl Pagination {
    /// Computes pagination metadata for a page of `returned` items.
    #[must_use]
    pub fn compute(query: &TaskQuery, total: u64, returned: usize) -> Self {
        let page = query.page();
        let per_page = query.per_page();
        let returned_count = u64::try_from(returned).unwrap_or(u64::MAX);
        let from = (returned_count > 0).then(|| query.offset() + 1);
        Self {
            current_page: page,
            from,
            last_page: total.div_ceil(per_page).max(1),
            per_page,
            to: from.map(|first| first + returned_count - 1),
            total,
        }
    }
}

//! Directory port for user lookups.

use crate::user::domain::{User, UserId, UserSummary};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Lookup contract for the identity collaborator.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds the partial projection for a user.
    ///
    /// Returns `None` when the user does not exist; used both to validate
    /// task assignees and to build the projection attached to tasks.
    async fn find_summary(&self, id: UserId) -> UserDirectoryResult<Option<UserSummary>>;

    /// Finds a full user record including role profiles.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

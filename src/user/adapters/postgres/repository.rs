//! `PostgreSQL` directory implementation for user lookups.

use super::{
    models::UserRow,
    schema::{profile_user, profiles, users},
};
use crate::user::{
    domain::{Profile, User, UserId, UserSummary},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: UserPgPool,
}

impl PostgresUserDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserDirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserDirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserDirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserDirectoryError::persistence)?
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_summary(&self, id: UserId) -> UserDirectoryResult<Option<UserSummary>> {
        self.run_blocking(move |connection| {
            let row = find_user_row(connection, id)?;
            Ok(row.map(row_to_summary))
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let Some(row) = find_user_row(connection, id)? else {
                return Ok(None);
            };

            let slugs: Vec<String> = profile_user::table
                .inner_join(profiles::table)
                .filter(profile_user::user_id.eq(id.into_inner()))
                .select(profiles::slug)
                .load(connection)
                .map_err(UserDirectoryError::persistence)?;
            let user_profiles = slugs
                .iter()
                .map(|slug| Profile::try_from(slug.as_str()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(UserDirectoryError::persistence)?;

            Ok(Some(User::from_persisted(
                UserId::from_uuid(row.id),
                row.name,
                row.email,
                user_profiles,
            )))
        })
        .await
    }
}

fn find_user_row(
    connection: &mut PgConnection,
    id: UserId,
) -> UserDirectoryResult<Option<UserRow>> {
    users::table
        .filter(users::id.eq(id.into_inner()))
        .select(UserRow::as_select())
        .first::<UserRow>(connection)
        .optional()
        .map_err(UserDirectoryError::persistence)
}

fn row_to_summary(row: UserRow) -> UserSummary {
    UserSummary {
        id: UserId::from_uuid(row.id),
        name: row.name,
        email: row.email,
    }
}

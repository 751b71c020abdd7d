//! PostgreSQL-backed `MembershipRepository`.
//!
//! Replacement runs in one transaction: delete the project's grants, resolve
//! which requested ids exist, then insert the survivors. [`replace_grants`]
//! is shared with the project repository so a project write and its grants
//! commit together.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncConnection as _, AsyncPgConnection, RunQueryDsl};
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{MembershipRepository, MembershipRepositoryError};
use crate::domain::{ProjectId, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewMembershipRow;
use super::pool::{DbPool, PoolError};
use super::schema::{project_users, users};

/// Diesel implementation of [`MembershipRepository`].
#[derive(Clone)]
pub struct DieselMembershipRepository {
    pool: DbPool,
}

impl DieselMembershipRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> MembershipRepositoryError {
    map_pool_error(error, MembershipRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> MembershipRepositoryError {
    map_diesel_error(
        error,
        MembershipRepositoryError::query,
        MembershipRepositoryError::connection,
    )
}

fn to_user_ids(raw: Vec<i32>) -> Result<Vec<UserId>, MembershipRepositoryError> {
    raw.into_iter()
        .map(|id| UserId::new(id).map_err(|err| MembershipRepositoryError::query(err.to_string())))
        .collect()
}

/// First-seen order, duplicates removed, only ids present in `existing`.
fn granted_ids(requested: &[i32], existing: &[i32]) -> Vec<i32> {
    let mut granted: Vec<i32> = Vec::with_capacity(requested.len());
    for id in requested {
        if existing.contains(id) && !granted.contains(id) {
            granted.push(*id);
        }
    }
    granted
}

/// Swap every grant on `project_id` for the requested ids that exist.
///
/// Callers run this inside their own transaction.
pub(super) async fn replace_grants(
    conn: &mut AsyncPgConnection,
    project_id: i32,
    requested: &[i32],
) -> QueryResult<Vec<i32>> {
    diesel::delete(project_users::table.filter(project_users::project_id.eq(project_id)))
        .execute(conn)
        .await?;

    let existing: Vec<i32> = users::table
        .filter(users::id.eq_any(requested))
        .select(users::id)
        .load(conn)
        .await?;
    let granted = granted_ids(requested, &existing);

    if !granted.is_empty() {
        let rows: Vec<NewMembershipRow> = granted
            .iter()
            .map(|user_id| NewMembershipRow {
                project_id,
                user_id: *user_id,
            })
            .collect();
        diesel::insert_into(project_users::table)
            .values(&rows)
            .execute(conn)
            .await?;
    }
    Ok(granted)
}

#[async_trait]
impl MembershipRepository for DieselMembershipRepository {
    async fn is_member(
        &self,
        project: ProjectId,
        user: UserId,
    ) -> Result<bool, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let found: Option<i32> = project_users::table
            .filter(project_users::project_id.eq(project.get()))
            .filter(project_users::user_id.eq(user.get()))
            .select(project_users::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(found.is_some())
    }

    async fn members(&self, project: ProjectId) -> Result<Vec<UserId>, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let raw: Vec<i32> = project_users::table
            .filter(project_users::project_id.eq(project.get()))
            .select(project_users::user_id)
            .order(project_users::user_id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        to_user_ids(raw)
    }

    async fn replace(
        &self,
        project: ProjectId,
        candidates: Vec<UserId>,
    ) -> Result<Vec<UserId>, MembershipRepositoryError> {
        let project_id = project.get();
        let requested: Vec<i32> = candidates.iter().map(|user| user.get()).collect();
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let granted = conn
            .transaction(|conn| {
                async move { replace_grants(conn, project_id, &requested).await }.scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        to_user_ids(granted)
    }
}

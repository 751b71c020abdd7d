//! PostgreSQL-backed `ProjectRepository`.
//!
//! Writes that carry a member list run the record change and the grant
//! replacement in one transaction on one connection.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::AsSelect;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};

use crate::domain::ports::{ProjectRepository, ProjectRepositoryError};
use crate::domain::{NewProject, Project, ProjectChanges, ProjectId, UserId};

use super::diesel_membership_repository::replace_grants;
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProjectRow, ProjectRow, ProjectUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{project_users, projects};

/// Diesel implementation of [`ProjectRepository`].
#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ProjectRepositoryError {
    map_pool_error(error, ProjectRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ProjectRepositoryError {
    map_diesel_error(
        error,
        ProjectRepositoryError::query,
        ProjectRepositoryError::connection,
    )
}

fn to_domain(rows: Vec<ProjectRow>) -> Result<Vec<Project>, ProjectRepositoryError> {
    rows.into_iter()
        .map(|row| Project::try_from(row).map_err(ProjectRepositoryError::query))
        .collect()
}

/// Projects created by `user` or granted to them, ascending by id.
fn visible_to(user: i32) -> projects::BoxedQuery<'static, Pg, AsSelect<ProjectRow, Pg>> {
    let member_of = project_users::table
        .filter(project_users::user_id.eq(user))
        .select(project_users::project_id);
    projects::table
        .filter(
            projects::created_by_id
                .eq(user)
                .or(projects::id.eq_any(member_of)),
        )
        .select(ProjectRow::as_select())
        .order(projects::id.asc())
        .into_boxed()
}

fn raw_ids(members: Option<Vec<UserId>>) -> Option<Vec<i32>> {
    members.map(|ids| ids.iter().map(|id| id.get()).collect())
}

fn one_to_domain(row: Option<ProjectRow>) -> Result<Option<Project>, ProjectRepositoryError> {
    row.map(|row| Project::try_from(row).map_err(ProjectRepositoryError::query))
        .transpose()
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn list_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<ProjectRow> = projects::table
            .select(ProjectRow::as_select())
            .order(projects::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        to_domain(rows)
    }

    async fn list_visible_to(&self, user: UserId) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<ProjectRow> = visible_to(user.get())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        to_domain(rows)
    }

    async fn find_unscoped(
        &self,
        id: ProjectId,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<ProjectRow> = projects::table
            .find(id.get())
            .select(ProjectRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        one_to_domain(row)
    }

    async fn create(
        &self,
        project: &NewProject,
        members: Option<Vec<UserId>>,
    ) -> Result<Project, ProjectRepositoryError> {
        let name = project.name.as_str().to_owned();
        let created_by_id = project.created_by_id.get();
        let requested = raw_ids(members);
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: ProjectRow = conn
            .transaction(|conn| {
                async move {
                    let row: ProjectRow = diesel::insert_into(projects::table)
                        .values(NewProjectRow {
                            name: &name,
                            created_by_id,
                        })
                        .returning(ProjectRow::as_returning())
                        .get_result(conn)
                        .await?;
                    if let Some(requested) = requested {
                        replace_grants(conn, row.id, &requested).await?;
                    }
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;
        Project::try_from(row).map_err(ProjectRepositoryError::query)
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
        members: Option<Vec<UserId>>,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let project_id = id.get();
        let name = changes.name.as_ref().map(|name| name.as_str().to_owned());
        let requested = raw_ids(members);
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<ProjectRow> = conn
            .transaction(|conn| {
                async move {
                    let changeset = ProjectUpdate {
                        name: name.as_deref(),
                        updated_at: Utc::now(),
                    };
                    let row: Option<ProjectRow> = diesel::update(projects::table.find(project_id))
                        .set(&changeset)
                        .returning(ProjectRow::as_returning())
                        .get_result(conn)
                        .await
                        .optional()?;
                    if let (Some(_), Some(requested)) = (&row, requested) {
                        replace_grants(conn, project_id, &requested).await?;
                    }
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;
        one_to_domain(row)
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(projects::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}

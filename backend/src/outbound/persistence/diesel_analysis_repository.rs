//! PostgreSQL-backed `AnalysisRepository`.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AnalysisRepository, AnalysisRepositoryError};
use crate::domain::{Analysis, AnalysisChanges, AnalysisId, NewAnalysis, ProjectId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AnalysisRow, AnalysisUpdate, NewAnalysisRow};
use super::pool::{DbPool, PoolError};
use super::schema::analyses;

/// Diesel implementation of [`AnalysisRepository`].
#[derive(Clone)]
pub struct DieselAnalysisRepository {
    pool: DbPool,
}

impl DieselAnalysisRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> AnalysisRepositoryError {
    map_pool_error(error, AnalysisRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> AnalysisRepositoryError {
    map_diesel_error(
        error,
        AnalysisRepositoryError::query,
        AnalysisRepositoryError::connection,
    )
}

fn to_domain(row: AnalysisRow) -> Result<Analysis, AnalysisRepositoryError> {
    Analysis::try_from(row).map_err(AnalysisRepositoryError::query)
}

#[async_trait]
impl AnalysisRepository for DieselAnalysisRepository {
    async fn list_for_project(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Analysis>, AnalysisRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<AnalysisRow> = analyses::table
            .filter(analyses::project_id.eq(project.get()))
            .select(AnalysisRow::as_select())
            .order(analyses::id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn find(
        &self,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<AnalysisRow> = analyses::table
            .filter(analyses::id.eq(id.get()))
            .filter(analyses::project_id.eq(project.get()))
            .select(AnalysisRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(to_domain).transpose()
    }

    async fn create(&self, analysis: &NewAnalysis) -> Result<Analysis, AnalysisRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: AnalysisRow = diesel::insert_into(analyses::table)
            .values(NewAnalysisRow {
                name: analysis.name.as_str(),
                project_id: analysis.project_id.get(),
            })
            .returning(AnalysisRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        to_domain(row)
    }

    async fn update(
        &self,
        project: ProjectId,
        id: AnalysisId,
        changes: &AnalysisChanges,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changeset = AnalysisUpdate {
            name: changes.name.as_ref().map(|name| name.as_str()),
            updated_at: Utc::now(),
        };
        let target = analyses::table
            .filter(analyses::id.eq(id.get()))
            .filter(analyses::project_id.eq(project.get()));
        let row: Option<AnalysisRow> = diesel::update(target)
            .set(&changeset)
            .returning(AnalysisRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(to_domain).transpose()
    }

    async fn delete(
        &self,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<bool, AnalysisRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let target = analyses::table
            .filter(analyses::id.eq(id.get()))
            .filter(analyses::project_id.eq(project.get()));
        let deleted = diesel::delete(target)
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}

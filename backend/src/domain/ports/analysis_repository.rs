//! Driven port for analysis persistence.
//!
//! Every lookup is scoped to the parent project, so an analysis id paired
//! with the wrong project resolves to nothing.
use async_trait::async_trait;

use crate::domain::{Analysis, AnalysisChanges, AnalysisId, NewAnalysis, ProjectId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by analysis repository adapters.
    pub enum AnalysisRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "analysis repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "analysis repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Analyses of `project`, ordered by ascending id.
    async fn list_for_project(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Analysis>, AnalysisRepositoryError>;

    /// Fetch one analysis of `project`.
    async fn find(
        &self,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError>;

    /// Insert an analysis and return the stored record.
    async fn create(&self, analysis: &NewAnalysis) -> Result<Analysis, AnalysisRepositoryError>;

    /// Merge `changes` into an analysis of `project`.
    async fn update(
        &self,
        project: ProjectId,
        id: AnalysisId,
        changes: &AnalysisChanges,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError>;

    /// Delete an analysis of `project`.
    async fn delete(&self, project: ProjectId, id: AnalysisId)
    -> Result<bool, AnalysisRepositoryError>;
}

//! Driving port for analysis writes.
use async_trait::async_trait;

use crate::domain::{Analysis, AnalysisChanges, AnalysisId, AnalysisName, Error, ProjectId, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysesCommand: Send + Sync {
    /// Create an analysis under `project`.
    async fn create(
        &self,
        actor: &User,
        project: ProjectId,
        name: AnalysisName,
    ) -> Result<Analysis, Error>;

    /// Update an analysis of `project`.
    async fn update(
        &self,
        actor: &User,
        project: ProjectId,
        id: AnalysisId,
        changes: AnalysisChanges,
    ) -> Result<Analysis, Error>;

    /// Delete an analysis of `project`.
    async fn delete(&self, actor: &User, project: ProjectId, id: AnalysisId) -> Result<(), Error>;
}

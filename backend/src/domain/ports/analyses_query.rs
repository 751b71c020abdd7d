//! Driving port for analysis reads.
use async_trait::async_trait;

use crate::domain::{Analysis, AnalysisId, Error, ProjectId, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysesQuery: Send + Sync {
    /// Analyses of a project; empty when the project is absent or invisible.
    async fn list(&self, actor: &User, project: ProjectId) -> Result<Vec<Analysis>, Error>;

    /// One analysis of a visible project.
    async fn get(&self, actor: &User, project: ProjectId, id: AnalysisId)
    -> Result<Analysis, Error>;
}

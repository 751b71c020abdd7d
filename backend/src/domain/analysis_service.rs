//! Analysis service.
//!
//! Every operation first establishes that the parent project is visible to
//! the actor. Listing an invisible project yields an empty list; every other
//! operation reports it as not found.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::access::{ProjectVisibility, analysis_policy};
use crate::domain::ports::{
    AnalysesCommand, AnalysesQuery, AnalysisRepository, MembershipRepository, ProjectRepository,
};
use crate::domain::service_support::{
    analysis_not_found, map_analysis_repository_error, project_not_found,
};
use crate::domain::{
    Analysis, AnalysisChanges, AnalysisId, AnalysisName, Error, NewAnalysis, Project, ProjectId,
    User,
};

const CREATE_FORBIDDEN: &str = "Insufficient permissions to create analyses in this project";
const MUTATE_FORBIDDEN: &str = "Insufficient permissions to modify analyses in this project";

/// Analysis service implementing the analysis driving ports.
pub struct AnalysisService<A, P, M> {
    analyses: Arc<A>,
    visibility: ProjectVisibility<P, M>,
}

impl<A, P, M> AnalysisService<A, P, M> {
    /// Create a service over the analysis, project and membership repositories.
    pub fn new(analyses: Arc<A>, projects: Arc<P>, memberships: Arc<M>) -> Self {
        Self {
            analyses,
            visibility: ProjectVisibility::new(projects, memberships),
        }
    }
}

impl<A, P, M> AnalysisService<A, P, M>
where
    A: AnalysisRepository,
    P: ProjectRepository,
    M: MembershipRepository,
{
    async fn require_mutable_project(&self, actor: &User, id: ProjectId) -> Result<Project, Error> {
        let project = self.visibility.require_visible(actor, id).await?;
        if analysis_policy::can_mutate(actor, &project) {
            Ok(project)
        } else {
            debug!(user_id = %actor.id, project_id = %id, "analysis mutation refused");
            Err(Error::forbidden(MUTATE_FORBIDDEN))
        }
    }
}

#[async_trait]
impl<A, P, M> AnalysesQuery for AnalysisService<A, P, M>
where
    A: AnalysisRepository,
    P: ProjectRepository,
    M: MembershipRepository,
{
    async fn list(&self, actor: &User, project: ProjectId) -> Result<Vec<Analysis>, Error> {
        if self.visibility.find_visible(actor, project).await?.is_none() {
            return Ok(Vec::new());
        }
        self.analyses
            .list_for_project(project)
            .await
            .map_err(map_analysis_repository_error)
    }

    async fn get(
        &self,
        actor: &User,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<Analysis, Error> {
        self.visibility.require_visible(actor, project).await?;
        self.analyses
            .find(project, id)
            .await
            .map_err(map_analysis_repository_error)?
            .ok_or_else(analysis_not_found)
    }
}

#[async_trait]
impl<A, P, M> AnalysesCommand for AnalysisService<A, P, M>
where
    A: AnalysisRepository,
    P: ProjectRepository,
    M: MembershipRepository,
{
    async fn create(
        &self,
        actor: &User,
        project: ProjectId,
        name: AnalysisName,
    ) -> Result<Analysis, Error> {
        let parent = self.visibility.require_visible(actor, project).await?;
        if !analysis_policy::can_create(actor, &parent) {
            debug!(user_id = %actor.id, project_id = %project, "analysis creation refused");
            return Err(Error::forbidden(CREATE_FORBIDDEN));
        }
        // Re-evaluate against a fresh project read and membership lookup.
        if self.visibility.find_visible(actor, project).await?.is_none() {
            return Err(project_not_found());
        }

        let created = self
            .analyses
            .create(&NewAnalysis {
                name,
                project_id: project,
            })
            .await
            .map_err(map_analysis_repository_error)?;
        info!(analysis_id = %created.id, project_id = %project, "analysis created");
        Ok(created)
    }

    async fn update(
        &self,
        actor: &User,
        project: ProjectId,
        id: AnalysisId,
        changes: AnalysisChanges,
    ) -> Result<Analysis, Error> {
        self.require_mutable_project(actor, project).await?;
        self.analyses
            .update(project, id, &changes)
            .await
            .map_err(map_analysis_repository_error)?
            .ok_or_else(analysis_not_found)
    }

    async fn delete(&self, actor: &User, project: ProjectId, id: AnalysisId) -> Result<(), Error> {
        self.require_mutable_project(actor, project).await?;
        let deleted = self
            .analyses
            .delete(project, id)
            .await
            .map_err(map_analysis_repository_error)?;
        if !deleted {
            return Err(analysis_not_found());
        }
        info!(analysis_id = %id, project_id = %project, "analysis deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "analysis_service_tests.rs"]
mod tests;

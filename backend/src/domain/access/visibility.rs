//! Project visibility lookups shared by the project and analysis services.

use std::sync::Arc;

use tracing::debug;

use crate::domain::access::project_policy::{self, ProjectRelation};
use crate::domain::ports::{MembershipRepository, ProjectRepository};
use crate::domain::service_support::{
    map_membership_repository_error, map_project_repository_error, project_not_found,
};
use crate::domain::{Error, Project, ProjectId, Role, User};

/// Resolves whether a project exists and is visible to the acting user.
///
/// Each call queries the store afresh; nothing is cached between calls.
pub struct ProjectVisibility<P, M> {
    projects: Arc<P>,
    memberships: Arc<M>,
}

impl<P, M> Clone for ProjectVisibility<P, M> {
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            memberships: Arc::clone(&self.memberships),
        }
    }
}

impl<P, M> ProjectVisibility<P, M> {
    /// Create a visibility resolver over the given repositories.
    pub fn new(projects: Arc<P>, memberships: Arc<M>) -> Self {
        Self {
            projects,
            memberships,
        }
    }

    /// Project repository used for lookups.
    pub fn projects(&self) -> &P {
        &self.projects
    }
}

impl<P, M> ProjectVisibility<P, M>
where
    P: ProjectRepository,
    M: MembershipRepository,
{
    /// Look up ownership and membership of `actor` on `project`.
    pub async fn relation(&self, actor: &User, project: &Project) -> Result<ProjectRelation, Error> {
        let owner = project_policy::is_owner(actor, project);
        let member = self
            .memberships
            .is_member(project.id, actor.id)
            .await
            .map_err(map_membership_repository_error)?;
        Ok(ProjectRelation { owner, member })
    }

    /// Whether `actor` may see `project`, using fresh relationship lookups.
    pub async fn is_visible(&self, actor: &User, project: &Project) -> Result<bool, Error> {
        if actor.role == Role::Admin {
            return Ok(true);
        }
        let relation = self.relation(actor, project).await?;
        Ok(project_policy::can_view(actor, relation))
    }

    /// Fetch `id` if it exists and `actor` may see it.
    pub async fn find_visible(&self, actor: &User, id: ProjectId) -> Result<Option<Project>, Error> {
        let Some(project) = self
            .projects
            .find_unscoped(id)
            .await
            .map_err(map_project_repository_error)?
        else {
            return Ok(None);
        };

        if self.is_visible(actor, &project).await? {
            Ok(Some(project))
        } else {
            debug!(user_id = %actor.id, project_id = %id, "project hidden from user");
            Ok(None)
        }
    }

    /// Like [`Self::find_visible`], reporting absence as not found.
    pub async fn require_visible(&self, actor: &User, id: ProjectId) -> Result<Project, Error> {
        self.find_visible(actor, id)
            .await?
            .ok_or_else(project_not_found)
    }
}

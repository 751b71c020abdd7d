//! Project service: visibility-scoped reads and ownership-checked writes.
//!
//! A project the actor cannot see is reported as not found. A project the
//! actor can find but not change is reported as forbidden.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::access::{ProjectVisibility, project_policy};
use crate::domain::ports::{
    CreateProjectRequest, MembershipRepository, ProjectRepository, ProjectsCommand, ProjectsQuery,
    UpdateProjectRequest,
};
use crate::domain::service_support::{map_project_repository_error, project_not_found};
use crate::domain::{Error, NewProject, Project, ProjectId, Role, User};

const CREATE_FORBIDDEN: &str = "Insufficient permissions to create projects";
const MUTATE_FORBIDDEN: &str = "Insufficient permissions to modify this project";

/// Project service implementing the project driving ports.
pub struct ProjectService<P, M> {
    visibility: ProjectVisibility<P, M>,
}

impl<P, M> ProjectService<P, M> {
    /// Create a service over the project and membership repositories.
    pub fn new(projects: Arc<P>, memberships: Arc<M>) -> Self {
        Self {
            visibility: ProjectVisibility::new(projects, memberships),
        }
    }
}

impl<P, M> ProjectService<P, M>
where
    P: ProjectRepository,
    M: MembershipRepository,
{
    /// Raw lookup followed by the mutation check.
    async fn find_mutable(&self, actor: &User, id: ProjectId) -> Result<Project, Error> {
        let project = self
            .visibility
            .projects()
            .find_unscoped(id)
            .await
            .map_err(map_project_repository_error)?
            .ok_or_else(project_not_found)?;

        if project_policy::can_mutate(actor, &project) {
            Ok(project)
        } else {
            debug!(user_id = %actor.id, project_id = %id, "project mutation refused");
            Err(Error::forbidden(MUTATE_FORBIDDEN))
        }
    }
}

#[async_trait]
impl<P, M> ProjectsQuery for ProjectService<P, M>
where
    P: ProjectRepository,
    M: MembershipRepository,
{
    async fn list(&self, actor: &User) -> Result<Vec<Project>, Error> {
        let projects = self.visibility.projects();
        let listed = if actor.role == Role::Admin {
            projects.list_all().await
        } else {
            projects.list_visible_to(actor.id).await
        };
        listed.map_err(map_project_repository_error)
    }

    async fn get(&self, actor: &User, id: ProjectId) -> Result<Project, Error> {
        self.visibility.require_visible(actor, id).await
    }
}

#[async_trait]
impl<P, M> ProjectsCommand for ProjectService<P, M>
where
    P: ProjectRepository,
    M: MembershipRepository,
{
    async fn create(&self, actor: &User, request: CreateProjectRequest) -> Result<Project, Error> {
        if !project_policy::can_create(actor) {
            debug!(user_id = %actor.id, role = %actor.role, "project creation refused");
            return Err(Error::forbidden(CREATE_FORBIDDEN));
        }

        let CreateProjectRequest { name, member_ids } = request;
        let project = self
            .visibility
            .projects()
            .create(
                &NewProject {
                    name,
                    created_by_id: actor.id,
                },
                member_ids,
            )
            .await
            .map_err(map_project_repository_error)?;

        info!(project_id = %project.id, user_id = %actor.id, "project created");
        Ok(project)
    }

    async fn update(
        &self,
        actor: &User,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> Result<Project, Error> {
        self.find_mutable(actor, id).await?;

        let UpdateProjectRequest {
            changes,
            member_ids,
        } = request;
        let updated = self
            .visibility
            .projects()
            .update(id, &changes, member_ids)
            .await
            .map_err(map_project_repository_error)?
            .ok_or_else(project_not_found)?;
        debug!(project_id = %id, user_id = %actor.id, "project updated");
        Ok(updated)
    }

    async fn delete(&self, actor: &User, id: ProjectId) -> Result<(), Error> {
        self.find_mutable(actor, id).await?;

        let deleted = self
            .visibility
            .projects()
            .delete(id)
            .await
            .map_err(map_project_repository_error)?;
        if !deleted {
            return Err(project_not_found());
        }
        info!(project_id = %id, user_id = %actor.id, "project deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "project_service_tests.rs"]
mod tests;

//! Driving port for project writes.
use async_trait::async_trait;

use crate::domain::{Error, Project, ProjectChanges, ProjectId, ProjectName, User, UserId};

/// Input for [`ProjectsCommand::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub name: ProjectName,
    /// Initial members; unknown ids are skipped.
    pub member_ids: Option<Vec<UserId>>,
}

/// Input for [`ProjectsCommand::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    pub changes: ProjectChanges,
    /// When present, fully replaces the project's members.
    pub member_ids: Option<Vec<UserId>>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectsCommand: Send + Sync {
    /// Create a project owned by `actor`.
    async fn create(&self, actor: &User, request: CreateProjectRequest) -> Result<Project, Error>;

    /// Update a project `actor` may mutate.
    async fn update(
        &self,
        actor: &User,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> Result<Project, Error>;

    /// Delete a project `actor` may mutate, with its analyses and members.
    async fn delete(&self, actor: &User, id: ProjectId) -> Result<(), Error>;
}

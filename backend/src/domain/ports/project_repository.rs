//! Driven port for project persistence.
use async_trait::async_trait;

use crate::domain::{NewProject, Project, ProjectChanges, ProjectId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by project repository adapters.
    pub enum ProjectRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "project repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "project repository query failed: {message}",
    }
}

/// Project storage.
///
/// Lists are ordered by ascending project id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Every project, unfiltered.
    async fn list_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Projects created by `user` or on which `user` holds a membership.
    async fn list_visible_to(&self, user: UserId) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Fetch a project by id without applying any visibility filter.
    ///
    /// Only services use this, to evaluate policy against the stored record.
    async fn find_unscoped(&self, id: ProjectId)
    -> Result<Option<Project>, ProjectRepositoryError>;

    /// Insert a project and return the stored record.
    ///
    /// When `members` is present the grants are set in the same atomic unit,
    /// with the semantics of [`super::MembershipRepository::replace`].
    async fn create(
        &self,
        project: &NewProject,
        members: Option<Vec<UserId>>,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Merge `changes` into the stored project; `None` when it does not exist.
    ///
    /// A present `members` list replaces the grants atomically with the
    /// record change. Neither is applied if either fails.
    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
        members: Option<Vec<UserId>>,
    ) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Delete a project with its analyses and memberships.
    async fn delete(&self, id: ProjectId) -> Result<bool, ProjectRepositoryError>;
}

//! Driving port for project reads scoped to the acting user.
use async_trait::async_trait;

use crate::domain::{Error, Project, ProjectId, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectsQuery: Send + Sync {
    /// Projects visible to `actor`, ordered by ascending id.
    async fn list(&self, actor: &User) -> Result<Vec<Project>, Error>;

    /// One project; invisible projects are reported as not found.
    async fn get(&self, actor: &User, id: ProjectId) -> Result<Project, Error>;
}

//! Driven port for project-user membership grants.
use async_trait::async_trait;

use crate::domain::{ProjectId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by membership repository adapters.
    pub enum MembershipRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "membership repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "membership repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Whether `user` holds a grant on `project`.
    async fn is_member(
        &self,
        project: ProjectId,
        user: UserId,
    ) -> Result<bool, MembershipRepositoryError>;

    /// Members of `project`, ordered by ascending user id.
    async fn members(&self, project: ProjectId) -> Result<Vec<UserId>, MembershipRepositoryError>;

    /// Atomically replace every grant on `project`.
    ///
    /// Ids that do not resolve to an existing user are skipped and duplicates
    /// collapse to one grant. Returns the granted ids in first-seen order.
    async fn replace(
        &self,
        project: ProjectId,
        users: Vec<UserId>,
    ) -> Result<Vec<UserId>, MembershipRepositoryError>;
}

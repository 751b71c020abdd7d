//! Driven port for user persistence.
//!
//! Repositories store and fetch records only; authorization happens in the
//! services that call them.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, ordered by ascending id.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a user and return the stored record.
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Merge `changes` into the stored user; `None` when it does not exist.
    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Delete a user, dropping its memberships and clearing the creator of
    /// its projects. Returns `false` when it did not exist.
    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}

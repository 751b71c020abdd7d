//! Driving port for user administration writes.
use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user.
    ///
    /// `actor` is `None` when the caller sent no identity; whether that is
    /// allowed depends on the configured registration policy.
    async fn create(&self, actor: Option<User>, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update to a user.
    async fn update(&self, actor: &User, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Delete a user.
    async fn delete(&self, actor: &User, id: UserId) -> Result<(), Error>;
}

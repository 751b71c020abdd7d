//! Driving port for user administration reads.
use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user; the actor must be an admin or a manager.
    async fn list(&self, actor: &User) -> Result<Vec<User>, Error>;

    /// One user; the actor must be an admin or a manager.
    async fn get(&self, actor: &User, id: UserId) -> Result<User, Error>;
}

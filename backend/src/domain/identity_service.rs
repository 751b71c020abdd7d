//! Resolves the acting user behind a request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{IdentityResolver, UserRepository};
use crate::domain::service_support::{USER_NOT_FOUND, map_user_repository_error};
use crate::domain::{Error, User, UserId};

/// [`IdentityResolver`] backed by the user repository.
#[derive(Clone)]
pub struct IdentityService<U> {
    users: Arc<U>,
}

impl<U> IdentityService<U> {
    /// Create a resolver over `users`.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> IdentityResolver for IdentityService<U>
where
    U: UserRepository,
{
    async fn resolve(&self, id: UserId) -> Result<User, Error> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?;
        user.ok_or_else(|| {
            warn!(user_id = %id, "identity header names an unknown user");
            Error::unauthorized(USER_NOT_FOUND)
        })
    }
}

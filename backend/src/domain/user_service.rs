//! User administration service.
//!
//! Listing, reading, updating and deleting users is reserved to admins and
//! managers. Registration follows the configured [`RegistrationPolicy`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::access::user_policy::{
    self, RegistrationDecision, RegistrationPolicy, USER_ADMIN_ROLES,
};
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};
use crate::domain::service_support::{map_user_repository_error, user_not_found};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

const IDENTITY_REQUIRED: &str = "User ID not provided";
const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// User service implementing the user administration driving ports.
#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
    registration: RegistrationPolicy,
}

impl<U> UserService<U> {
    /// Create a service over `users` with the given registration policy.
    pub fn new(users: Arc<U>, registration: RegistrationPolicy) -> Self {
        Self {
            users,
            registration,
        }
    }
}

fn insufficient_permissions(actor: &User) -> Error {
    let required: Vec<&str> = USER_ADMIN_ROLES.iter().map(|role| role.as_str()).collect();
    Error::forbidden(INSUFFICIENT_PERMISSIONS).with_details(json!({
        "required": required,
        "current": actor.role.as_str(),
    }))
}

fn require_administrator(actor: &User) -> Result<(), Error> {
    if user_policy::can_administer_users(actor) {
        Ok(())
    } else {
        debug!(user_id = %actor.id, role = %actor.role, "user administration refused");
        Err(insufficient_permissions(actor))
    }
}

#[async_trait]
impl<U> UsersQuery for UserService<U>
where
    U: UserRepository,
{
    async fn list(&self, actor: &User) -> Result<Vec<User>, Error> {
        require_administrator(actor)?;
        self.users.list().await.map_err(map_user_repository_error)
    }

    async fn get(&self, actor: &User, id: UserId) -> Result<User, Error> {
        require_administrator(actor)?;
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(user_not_found)
    }
}

#[async_trait]
impl<U> UsersCommand for UserService<U>
where
    U: UserRepository,
{
    async fn create(&self, actor: Option<User>, user: NewUser) -> Result<User, Error> {
        let decision = user_policy::can_register(self.registration, actor.as_ref());
        match (decision, actor.as_ref()) {
            (RegistrationDecision::Allowed, _) => {}
            (RegistrationDecision::Denied, Some(user)) => {
                debug!(user_id = %user.id, role = %user.role, "registration refused");
                return Err(insufficient_permissions(user));
            }
            (RegistrationDecision::IdentityRequired | RegistrationDecision::Denied, _) => {
                return Err(Error::unauthorized(IDENTITY_REQUIRED));
            }
        }

        let created = self
            .users
            .create(&user)
            .await
            .map_err(map_user_repository_error)?;
        info!(user_id = %created.id, role = %created.role, "user created");
        Ok(created)
    }

    async fn update(&self, actor: &User, id: UserId, changes: UserChanges) -> Result<User, Error> {
        require_administrator(actor)?;
        self.users
            .update(id, &changes)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(user_not_found)
    }

    async fn delete(&self, actor: &User, id: UserId) -> Result<(), Error> {
        require_administrator(actor)?;
        let deleted = self
            .users
            .delete(id)
            .await
            .map_err(map_user_repository_error)?;
        if !deleted {
            return Err(user_not_found());
        }
        info!(user_id = %id, deleted_by = %actor.id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

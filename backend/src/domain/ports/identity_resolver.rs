//! Driving port resolving the acting user of a request.
use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Establishes the acting principal for protected operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve `id` to a stored user.
    ///
    /// An unknown id is [`crate::domain::ErrorCode::Unauthorized`], never a
    /// server error.
    async fn resolve(&self, id: UserId) -> Result<User, Error>;
}

//! Who may create and change analyses.
//!
//! Analyses inherit access from their parent project; both checks here assume
//! the caller already established that the project is visible.

use crate::domain::access::project_policy::is_owner;
use crate::domain::{Project, Role, User};

/// Admins may add analyses anywhere, managers only to projects they created,
/// readers never.
#[must_use]
pub fn can_create(actor: &User, project: &Project) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Manager => is_owner(actor, project),
        Role::Reader => false,
    }
}

/// Admins and the project's creator may change or delete its analyses.
#[must_use]
pub fn can_mutate(actor: &User, project: &Project) -> bool {
    actor.role == Role::Admin || is_owner(actor, project)
}

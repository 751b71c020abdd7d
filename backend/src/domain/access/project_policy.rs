//! Who may see, create and change projects.

use crate::domain::{Project, Role, User};

/// How the acting user relates to one project.
///
/// Ownership and membership are established by separate lookups and only
/// combined here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectRelation {
    /// The user created the project.
    pub owner: bool,
    /// The user holds a membership grant on the project.
    pub member: bool,
}

/// Whether `actor` created `project`.
#[must_use]
pub fn is_owner(actor: &User, project: &Project) -> bool {
    project.is_created_by(actor.id)
}

/// Admins see everything; everyone else sees what they own or belong to.
#[must_use]
pub fn can_view(actor: &User, relation: ProjectRelation) -> bool {
    actor.role == Role::Admin || relation.owner || relation.member
}

/// Admins and managers may create projects.
#[must_use]
pub fn can_create(actor: &User) -> bool {
    matches!(actor.role, Role::Admin | Role::Manager)
}

/// Admins may change any project, managers only their own.
///
/// Membership never grants mutation.
#[must_use]
pub fn can_mutate(actor: &User, project: &Project) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Manager => is_owner(actor, project),
        Role::Reader => false,
    }
}

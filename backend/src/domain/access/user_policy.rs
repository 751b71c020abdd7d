//! Who may administer users.

use crate::domain::{Role, User};

/// Roles allowed to list, read, update and delete users.
pub const USER_ADMIN_ROLES: [Role; 2] = [Role::Admin, Role::Manager];

/// How `POST /users`-style registration is gated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Anyone may create users, with or without an identity.
    #[default]
    Open,
    /// Only admins and managers may create users.
    Restricted,
}

/// Outcome of a registration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationDecision {
    Allowed,
    /// No identity was supplied but one is required.
    IdentityRequired,
    /// The identity lacks an administering role.
    Denied,
}

/// Whether `actor` may administer users.
#[must_use]
pub fn can_administer_users(actor: &User) -> bool {
    USER_ADMIN_ROLES.contains(&actor.role)
}

/// Decide whether `actor` may register a new user under `policy`.
#[must_use]
pub fn can_register(policy: RegistrationPolicy, actor: Option<&User>) -> RegistrationDecision {
    match (policy, actor) {
        (RegistrationPolicy::Open, _) => RegistrationDecision::Allowed,
        (RegistrationPolicy::Restricted, None) => RegistrationDecision::IdentityRequired,
        (RegistrationPolicy::Restricted, Some(user)) if can_administer_users(user) => {
            RegistrationDecision::Allowed
        }
        (RegistrationPolicy::Restricted, Some(_)) => RegistrationDecision::Denied,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::test_fixtures::user_with_role;

    #[rstest]
    #[case(Role::Admin, true)]
    #[case(Role::Manager, true)]
    #[case(Role::Reader, false)]
    fn administration_roles(#[case] role: Role, #[case] expected: bool) {
        assert_eq!(can_administer_users(&user_with_role(1, role)), expected);
    }

    #[rstest]
    fn open_registration_allows_anonymous_callers() {
        assert_eq!(
            can_register(RegistrationPolicy::Open, None),
            RegistrationDecision::Allowed
        );
    }

    #[rstest]
    #[case(None, RegistrationDecision::IdentityRequired)]
    #[case(Some(Role::Reader), RegistrationDecision::Denied)]
    #[case(Some(Role::Manager), RegistrationDecision::Allowed)]
    #[case(Some(Role::Admin), RegistrationDecision::Allowed)]
    fn restricted_registration(#[case] role: Option<Role>, #[case] expected: RegistrationDecision) {
        let actor = role.map(|role| user_with_role(3, role));
        assert_eq!(
            can_register(RegistrationPolicy::Restricted, actor.as_ref()),
            expected
        );
    }
}

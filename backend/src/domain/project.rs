//! Project and membership data model.

use chrono::{DateTime, Utc};

use crate::domain::UserId;
use crate::domain::values::{define_record_id, define_record_name};

define_record_id!(
    /// Store-assigned project identifier.
    ProjectId
);

define_record_name!(
    /// Project name; non-blank, at most 128 characters.
    ProjectName,
    max = 128
);

/// Stored project record.
///
/// `created_by_id` becomes `None` once the creator is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub created_by_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether `user` created this project.
    #[must_use]
    pub fn is_created_by(&self, user: UserId) -> bool {
        self.created_by_id == Some(user)
    }
}

/// Fields supplied when creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: ProjectName,
    pub created_by_id: UserId,
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub name: Option<ProjectName>,
}

/// Explicit access grant of one user on one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMembership {
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

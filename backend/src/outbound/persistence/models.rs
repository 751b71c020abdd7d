//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain records, treating malformed stored values as query errors.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{analyses, project_users, projects, users};
use crate::domain::{
    Analysis, AnalysisId, AnalysisName, Project, ProjectId, ProjectName, Role, User, UserId,
    UserName,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id).map_err(|err| format!("users.id: {err}"))?,
            name: UserName::new(row.name).map_err(|err| format!("users.name: {err}"))?,
            role: row
                .role
                .parse::<Role>()
                .map_err(|err| format!("users.role: {err}"))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub role: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: i32,
    pub name: String,
    pub created_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = String;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProjectId::new(row.id).map_err(|err| format!("projects.id: {err}"))?,
            name: ProjectName::new(row.name).map_err(|err| format!("projects.name: {err}"))?,
            created_by_id: row
                .created_by_id
                .map(UserId::new)
                .transpose()
                .map_err(|err| format!("projects.created_by_id: {err}"))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub(crate) struct NewProjectRow<'a> {
    pub name: &'a str,
    pub created_by_id: i32,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub(crate) struct ProjectUpdate<'a> {
    pub name: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_users)]
pub(crate) struct NewMembershipRow {
    pub project_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = analyses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnalysisRow {
    pub id: i32,
    pub name: String,
    pub project_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AnalysisRow> for Analysis {
    type Error = String;

    fn try_from(row: AnalysisRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AnalysisId::new(row.id).map_err(|err| format!("analyses.id: {err}"))?,
            name: AnalysisName::new(row.name).map_err(|err| format!("analyses.name: {err}"))?,
            project_id: ProjectId::new(row.project_id)
                .map_err(|err| format!("analyses.project_id: {err}"))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = analyses)]
pub(crate) struct NewAnalysisRow<'a> {
    pub name: &'a str,
    pub project_id: i32,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = analyses)]
pub(crate) struct AnalysisUpdate<'a> {
    pub name: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn user_row(id: i32, role: &str) -> UserRow {
        let now = Utc::now();
        UserRow {
            id,
            name: "Ada".to_owned(),
            role: role.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("manager", Role::Manager)]
    #[case("reader", Role::Reader)]
    fn user_rows_parse_stored_roles(#[case] stored: &str, #[case] expected: Role) {
        let user = User::try_from(user_row(1, stored)).expect("valid row");
        assert_eq!(user.role, expected);
    }

    #[rstest]
    #[case(user_row(1, "owner"), "users.role")]
    #[case(user_row(0, "admin"), "users.id")]
    fn malformed_user_rows_name_the_column(#[case] row: UserRow, #[case] column: &str) {
        let err = User::try_from(row).expect_err("malformed row");
        assert!(err.starts_with(column), "{err}");
    }

    #[rstest]
    fn orphaned_project_rows_keep_a_null_creator() {
        let now = Utc::now();
        let project = Project::try_from(ProjectRow {
            id: 3,
            name: "Beta".to_owned(),
            created_by_id: None,
            created_at: now,
            updated_at: now,
        })
        .expect("valid row");
        assert_eq!(project.created_by_id, None);
    }

    #[rstest]
    fn blank_analysis_names_are_rejected() {
        let now = Utc::now();
        let err = Analysis::try_from(AnalysisRow {
            id: 1,
            name: "   ".to_owned(),
            project_id: 1,
            created_at: now,
            updated_at: now,
        })
        .expect_err("blank name");
        assert!(err.starts_with("analyses.name"), "{err}");
    }
}

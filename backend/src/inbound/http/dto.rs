//! Request and response payloads shared by the REST handlers.
//!
//! Domain records stay serde-free; these types own the camelCase wire shape.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldName, parse_name, parse_role, retain_record_ids};
use crate::domain::{
    Analysis, AnalysisChanges, AnalysisName, Error, NewUser, Project, ProjectChanges,
    ProjectName, Role, User, UserChanges, UserId, UserName,
};

const NAME: FieldName = FieldName::new("name");
const ROLE: FieldName = FieldName::new("role");
const USER_IDS: FieldName = FieldName::new("userIds");

/// User as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "manager")]
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.into(),
            role: user.role.as_str().to_owned(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// Body for `POST /users`; `role` defaults to `reader`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    #[schema(example = "reader")]
    pub role: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(body: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: parse_name(body.name, NAME, UserName::new)?,
            role: body
                .role
                .map(|raw| parse_role(&raw, ROLE))
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Body for `PUT /users/{userId}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub role: Option<String>,
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = Error;

    fn try_from(body: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body
                .name
                .map(|raw| parse_name(raw, NAME, UserName::new))
                .transpose()?,
            role: body
                .role
                .map(|raw| parse_role(&raw, ROLE))
                .transpose()?,
        })
    }
}

/// Project as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alpha")]
    pub name: String,
    /// Null once the creator has been deleted.
    pub created_by_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.get(),
            name: project.name.into(),
            created_by_id: project.created_by_id.map(UserId::get),
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}

/// Body for `POST /projects`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    pub name: String,
    /// Members granted access; unknown ids are skipped.
    #[schema(max_items = 1_000)]
    pub user_ids: Option<Vec<i64>>,
}

/// Body for `PUT /projects/{projectId}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectBody {
    pub name: Option<String>,
    /// When present, replaces the project's memberships.
    #[schema(max_items = 1_000)]
    pub user_ids: Option<Vec<i64>>,
}

pub(super) fn project_name(raw: String) -> Result<ProjectName, Error> {
    parse_name(raw, NAME, ProjectName::new)
}

pub(super) fn member_ids(raw: Option<Vec<i64>>) -> Option<Vec<UserId>> {
    raw.map(|ids| retain_record_ids(&ids, USER_IDS))
}

impl TryFrom<&UpdateProjectBody> for ProjectChanges {
    type Error = Error;

    fn try_from(body: &UpdateProjectBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body.name.clone().map(project_name).transpose()?,
        })
    }
}

/// Analysis as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "A1")]
    pub name: String,
    pub project_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            id: analysis.id.get(),
            name: analysis.name.into(),
            project_id: analysis.project_id.get(),
            created_at: analysis.created_at.to_rfc3339(),
            updated_at: analysis.updated_at.to_rfc3339(),
        }
    }
}

/// Body for `POST /projects/{projectId}/analyses`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisBody {
    pub name: String,
}

impl TryFrom<CreateAnalysisBody> for AnalysisName {
    type Error = Error;

    fn try_from(body: CreateAnalysisBody) -> Result<Self, Self::Error> {
        parse_name(body.name, NAME, AnalysisName::new)
    }
}

/// Body for `PUT /projects/{projectId}/analyses/{analysisId}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnalysisBody {
    pub name: Option<String>,
}

impl TryFrom<UpdateAnalysisBody> for AnalysisChanges {
    type Error = Error;

    fn try_from(body: UpdateAnalysisBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body
                .name
                .map(|raw| parse_name(raw, NAME, AnalysisName::new))
                .transpose()?,
        })
    }
}

/// Confirmation body for deletions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Project deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

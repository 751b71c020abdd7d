//! Projects API handlers.
//!
//! Projects the acting user cannot see answer 404, never 403; mutation of a
//! visible project the user may not change answers 403.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{
    CreateProjectBody, MessageResponse, ProjectResponse, UpdateProjectBody, member_ids,
    project_name,
};
use super::identity::ActingUser;
use super::schemas::ErrorSchema;
use super::state::HttpState;
use super::validation::{FieldName, parse_id};
use crate::domain::ports::{CreateProjectRequest, UpdateProjectRequest};
use crate::domain::{ProjectChanges, ProjectId};

pub(super) const PROJECT_ID: FieldName = FieldName::new("projectId");

/// List projects visible to the acting user, ordered by id.
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "Visible projects", body = [ProjectResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    actor: ActingUser,
) -> ApiResult<web::Json<Vec<ProjectResponse>>> {
    let projects = state.projects.list(&actor.0).await?;
    Ok(web::Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Fetch one visible project.
#[utoipa::path(
    get,
    path = "/projects/{projectId}",
    params(("projectId" = i32, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found or not visible", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "getProject"
)]
#[get("/projects/{projectId}")]
pub async fn get_project(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProjectResponse>> {
    let id: ProjectId = parse_id(&path, PROJECT_ID)?;
    let project = state.projects.get(&actor.0, id).await?;
    Ok(web::Json(project.into()))
}

/// Create a project owned by the acting user.
#[utoipa::path(
    post,
    path = "/projects",
    request_body = CreateProjectBody,
    responses(
        (status = 201, description = "Created", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    actor: ActingUser,
    payload: web::Json<CreateProjectBody>,
) -> ApiResult<HttpResponse> {
    let CreateProjectBody { name, user_ids } = payload.into_inner();
    let request = CreateProjectRequest {
        name: project_name(name)?,
        member_ids: member_ids(user_ids),
    };
    let project = state.projects_command.create(&actor.0, request).await?;
    Ok(HttpResponse::Created().json(ProjectResponse::from(project)))
}

/// Rename a project and optionally replace its members.
#[utoipa::path(
    put,
    path = "/projects/{projectId}",
    params(("projectId" = i32, Path, description = "Project identifier")),
    request_body = UpdateProjectBody,
    responses(
        (status = 200, description = "Updated", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "updateProject"
)]
#[put("/projects/{projectId}")]
pub async fn update_project(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
    payload: web::Json<UpdateProjectBody>,
) -> ApiResult<web::Json<ProjectResponse>> {
    let id: ProjectId = parse_id(&path, PROJECT_ID)?;
    let body = payload.into_inner();
    let request = UpdateProjectRequest {
        changes: ProjectChanges::try_from(&body)?,
        member_ids: member_ids(body.user_ids),
    };
    let project = state.projects_command.update(&actor.0, id, request).await?;
    Ok(web::Json(project.into()))
}

/// Delete a project with its analyses and memberships.
#[utoipa::path(
    delete,
    path = "/projects/{projectId}",
    params(("projectId" = i32, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/projects/{projectId}")]
pub async fn delete_project(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: ProjectId = parse_id(&path, PROJECT_ID)?;
    state.projects_command.delete(&actor.0, id).await?;
    Ok(web::Json(MessageResponse::new("Project deleted")))
}

#[cfg(test)]
mod tests;

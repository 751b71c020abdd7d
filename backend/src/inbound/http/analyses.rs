//! Analyses API handlers, nested under their parent project.
//!
//! Listing an invisible project yields an empty array; every other operation
//! on an invisible project answers 404 `Project not found`.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{AnalysisResponse, CreateAnalysisBody, MessageResponse, UpdateAnalysisBody};
use super::identity::ActingUser;
use super::projects::PROJECT_ID;
use super::schemas::ErrorSchema;
use super::state::HttpState;
use super::validation::{FieldName, parse_id};
use crate::domain::{AnalysisChanges, AnalysisId, AnalysisName, Error, ProjectId};

const ANALYSIS_ID: FieldName = FieldName::new("analysisId");

fn analysis_path(raw: &(String, String)) -> Result<(ProjectId, AnalysisId), Error> {
    Ok((parse_id(&raw.0, PROJECT_ID)?, parse_id(&raw.1, ANALYSIS_ID)?))
}

/// List a project's analyses.
#[utoipa::path(
    get,
    path = "/projects/{projectId}/analyses",
    params(("projectId" = i32, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Analyses; empty when the project is not visible", body = [AnalysisResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["analyses"],
    operation_id = "listAnalyses"
)]
#[get("/projects/{projectId}/analyses")]
pub async fn list_analyses(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<AnalysisResponse>>> {
    let project: ProjectId = parse_id(&path, PROJECT_ID)?;
    let analyses = state.analyses.list(&actor.0, project).await?;
    Ok(web::Json(
        analyses.into_iter().map(AnalysisResponse::from).collect(),
    ))
}

/// Fetch one analysis.
#[utoipa::path(
    get,
    path = "/projects/{projectId}/analyses/{analysisId}",
    params(
        ("projectId" = i32, Path, description = "Project identifier"),
        ("analysisId" = i32, Path, description = "Analysis identifier")
    ),
    responses(
        (status = 200, description = "Analysis", body = AnalysisResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["analyses"],
    operation_id = "getAnalysis"
)]
#[get("/projects/{projectId}/analyses/{analysisId}")]
pub async fn get_analysis(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<AnalysisResponse>> {
    let (project, id) = analysis_path(&path)?;
    let analysis = state.analyses.get(&actor.0, project, id).await?;
    Ok(web::Json(analysis.into()))
}

/// Create an analysis in a project.
#[utoipa::path(
    post,
    path = "/projects/{projectId}/analyses",
    params(("projectId" = i32, Path, description = "Project identifier")),
    request_body = CreateAnalysisBody,
    responses(
        (status = 201, description = "Created", body = AnalysisResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["analyses"],
    operation_id = "createAnalysis"
)]
#[post("/projects/{projectId}/analyses")]
pub async fn create_analysis(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
    payload: web::Json<CreateAnalysisBody>,
) -> ApiResult<HttpResponse> {
    let project: ProjectId = parse_id(&path, PROJECT_ID)?;
    let name = AnalysisName::try_from(payload.into_inner())?;
    let analysis = state.analyses_command.create(&actor.0, project, name).await?;
    Ok(HttpResponse::Created().json(AnalysisResponse::from(analysis)))
}

/// Rename an analysis.
#[utoipa::path(
    put,
    path = "/projects/{projectId}/analyses/{analysisId}",
    params(
        ("projectId" = i32, Path, description = "Project identifier"),
        ("analysisId" = i32, Path, description = "Analysis identifier")
    ),
    request_body = UpdateAnalysisBody,
    responses(
        (status = 200, description = "Updated", body = AnalysisResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["analyses"],
    operation_id = "updateAnalysis"
)]
#[put("/projects/{projectId}/analyses/{analysisId}")]
pub async fn update_analysis(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdateAnalysisBody>,
) -> ApiResult<web::Json<AnalysisResponse>> {
    let (project, id) = analysis_path(&path)?;
    let changes = AnalysisChanges::try_from(payload.into_inner())?;
    let analysis = state
        .analyses_command
        .update(&actor.0, project, id, changes)
        .await?;
    Ok(web::Json(analysis.into()))
}

/// Delete an analysis.
#[utoipa::path(
    delete,
    path = "/projects/{projectId}/analyses/{analysisId}",
    params(
        ("projectId" = i32, Path, description = "Project identifier"),
        ("analysisId" = i32, Path, description = "Analysis identifier")
    ),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["analyses"],
    operation_id = "deleteAnalysis"
)]
#[delete("/projects/{projectId}/analyses/{analysisId}")]
pub async fn delete_analysis(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (project, id) = analysis_path(&path)?;
    state.analyses_command.delete(&actor.0, project, id).await?;
    Ok(web::Json(MessageResponse::new("Analysis deleted")))
}

#[cfg(test)]
mod tests;

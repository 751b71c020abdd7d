//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] collects every handler's `#[utoipa::path]` annotation, the
//! request/response DTOs and the error schema wrappers. Swagger UI serves it
//! in debug builds and `openapi-dump` writes it out for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::dto::{
    AnalysisResponse, CreateAnalysisBody, CreateProjectBody, CreateUserRequest, MessageResponse,
    ProjectResponse, UpdateAnalysisBody, UpdateProjectBody, UpdateUserRequest, UserResponse,
};
use crate::inbound::http::identity::USER_ID_HEADER;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Registers the `X-User-ID` header as an API-key scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "UserId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                USER_ID_HEADER,
                "Numeric id of the acting user.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "ProjectHub API",
        description = "Users, projects and analyses behind role- and ownership-aware access control."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    security(("UserId" = [])),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::get_project,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::update_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::analyses::list_analyses,
        crate::inbound::http::analyses::get_analysis,
        crate::inbound::http::analyses::create_analysis,
        crate::inbound::http::analyses::update_analysis,
        crate::inbound::http::analyses::delete_analysis,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserResponse,
        CreateUserRequest,
        UpdateUserRequest,
        ProjectResponse,
        CreateProjectBody,
        UpdateProjectBody,
        AnalysisResponse,
        CreateAnalysisBody,
        UpdateAnalysisBody,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "users", description = "User administration and registration"),
        (name = "projects", description = "Projects and their memberships"),
        (name = "analyses", description = "Analyses scoped to a project"),
        (name = "health", description = "Orchestration health checks")
    )
)]
pub struct ApiDoc;

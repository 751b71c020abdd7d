//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{userId}
//! POST   /users            {"name":"Grace","role":"manager"}
//! PUT    /users/{userId}   {"role":"admin"}
//! DELETE /users/{userId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use super::identity::{ActingUser, OptionalActingUser};
use super::schemas::ErrorSchema;
use super::state::HttpState;
use super::validation::{FieldName, parse_id};
use crate::domain::{NewUser, UserChanges, UserId};

const USER_ID: FieldName = FieldName::new("userId");

/// List every user. Requires an admin or manager.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    actor: ActingUser,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list(&actor.0).await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{userId}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id: UserId = parse_id(&path, USER_ID)?;
    let user = state.users.get(&actor.0, id).await?;
    Ok(web::Json(user.into()))
}

/// Register a user.
///
/// Open to anonymous callers unless registration is restricted, in which
/// case an admin or manager must be named in `X-User-ID`.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security((), ("UserId" = []))
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    actor: OptionalActingUser,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let user = state.users_command.create(actor.0, new_user).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Update a user's name or role.
#[utoipa::path(
    put,
    path = "/users/{userId}",
    params(("userId" = i32, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{userId}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let id: UserId = parse_id(&path, USER_ID)?;
    let changes = UserChanges::try_from(payload.into_inner())?;
    let user = state.users_command.update(&actor.0, id, changes).await?;
    Ok(web::Json(user.into()))
}

/// Delete a user, dropping their memberships.
#[utoipa::path(
    delete,
    path = "/users/{userId}",
    params(("userId" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{userId}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    actor: ActingUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: UserId = parse_id(&path, USER_ID)?;
    state.users_command.delete(&actor.0, id).await?;
    Ok(web::Json(MessageResponse::new("User deleted")))
}

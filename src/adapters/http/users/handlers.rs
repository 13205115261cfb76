//! HTTP handlers for account endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{CredentialsRequest, LoginResponse, RoleRequest};
use crate::adapters::http::error::{json_body, path_id, required, ApiError};
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;
use crate::adapters::http::MessageResponse;
use crate::application::handlers::account::{
    DeleteUserCommand, LoginCommand, RegisterUserCommand, SetUserRoleCommand,
};
use crate::domain::foundation::{Role, ServiceError, UserId};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let cmd = RegisterUserCommand {
        username: required("username", request.username)?,
        password: required("password", request.password)?,
    };

    let user = state.register_user_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;
    let cmd = LoginCommand {
        username: required("username", request.username)?,
        password: required("password", request.password)?,
    };

    let result = state.login_handler().handle(cmd).await?;
    Ok(Json(LoginResponse {
        user: result.user,
        token: result.token.token,
        expires_at: result.token.expires_at,
    }))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.list_users_handler().handle().await?;
    Ok(Json(users))
}

/// PUT /users/:id
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    payload: Result<Json<RoleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = path_id("id", &id)?;
    let request = json_body(payload)?;
    let role: Role = required("role", request.role)?
        .parse()
        .map_err(ServiceError::from)?;

    state
        .set_user_role_handler()
        .handle(SetUserRoleCommand { user_id, role })
        .await?;
    Ok(Json(MessageResponse::new("User role updated successfully")))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = path_id("id", &id)?;

    state
        .delete_user_handler()
        .handle(DeleteUserCommand { user_id })
        .await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

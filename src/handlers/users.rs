// src/handlers/users.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    domain::visibility::{scope_for, VisibilityScope},
    middleware::{
        auth::AuthenticatedActor,
        roles::{AdminOnly, RequireRole},
    },
    models::auth::{UpsertUserPayload, User},
};

// GET /api/users - cadastro é sempre gerido por admins
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Usuários visíveis para o admin", body = Vec<User>),
        (status = 403, description = "Sem perfil de administrador")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    _guard: RequireRole<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    // LOCATION_ADMIN só enxerga o próprio local
    let location = match scope_for(&actor) {
        VisibilityScope::Location(l) => Some(l),
        _ => None,
    };
    let users = app_state.auth_service.list_users(location.as_deref()).await?;
    Ok(Json(users))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UpsertUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 409, description = "Username ou NIK já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Json(payload): Json<UpsertUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state.auth_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// PUT /api/users/{id} - substituição integral, como o "replace-by-id" original
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    request_body = UpsertUserPayload,
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state.auth_service.update_user(id, payload).await?;
    Ok(Json(user))
}

// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.auth_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// src/handlers/penalties.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedActor,
        roles::{AdminOnly, RequireRole},
    },
    models::penalty::{CreatePenaltyPayload, Penalty, PenaltySummary},
};

// POST /api/penalties - só admins lançam penalidades
#[utoipa::path(
    post,
    path = "/api/penalties",
    tag = "Penalties",
    request_body = CreatePenaltyPayload,
    responses(
        (status = 201, description = "Penalidade lançada", body = Penalty),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_penalty(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    _guard: RequireRole<AdminOnly>,
    Json(payload): Json<CreatePenaltyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let penalty = app_state.penalty_service.create(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(penalty)))
}

// GET /api/penalties
#[utoipa::path(
    get,
    path = "/api/penalties",
    tag = "Penalties",
    responses(
        (status = 200, description = "Penalidades visíveis para o ator", body = Vec<Penalty>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_penalties(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let penalties = app_state.penalty_service.list(&actor).await?;
    Ok(Json(penalties))
}

// GET /api/penalties/summary - total por usuário (soma pura do ledger)
#[utoipa::path(
    get,
    path = "/api/penalties/summary",
    tag = "Penalties",
    responses(
        (status = 200, description = "Totais por usuário", body = Vec<PenaltySummary>)
    ),
    security(("api_jwt" = []))
)]
pub async fn penalty_summary(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.penalty_service.summary(&actor).await?;
    Ok(Json(summary))
}

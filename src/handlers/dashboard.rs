// src/handlers/dashboard.rs

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedActor,
    models::dashboard::{DashboardSummary, StatusBoardEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo operacional do dia", body = DashboardSummary),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.dashboard_service.summary(&actor).await?;
    Ok(Json(summary))
}

// GET /api/dashboard/status-board - a frota com o status derivado do dia
#[utoipa::path(
    get,
    path = "/api/dashboard/status-board",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Quadro de status da frota", body = Vec<StatusBoardEntry>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_status_board(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let board = app_state.dashboard_service.status_board(&actor).await?;
    Ok(Json(board))
}

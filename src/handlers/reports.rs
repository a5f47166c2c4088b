// src/handlers/reports.rs

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedActor,
    models::report::{Report, ReportQuery, SubmitReportPayload},
};

// POST /api/reports - envio do checklist diário
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "Reports",
    request_body = SubmitReportPayload,
    responses(
        (status = 201, description = "Checklist registrado", body = Report),
        (status = 403, description = "Veículo fora do escopo do ator"),
        (status = 409, description = "Já existe checklist para o veículo hoje")
    ),
    security(("api_jwt" = []))
)]
pub async fn submit_report(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<SubmitReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let report = app_state.report_service.submit(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

// GET /api/reports?from=&to=&vehicleId=&location=
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    params(
        ("from" = Option<String>, Query, description = "Data inicial (AAAA-MM-DD)"),
        ("to" = Option<String>, Query, description = "Data final (AAAA-MM-DD)"),
        ("vehicleId" = Option<String>, Query, description = "Número de casco"),
        ("location" = Option<String>, Query, description = "Local (só para admins globais)")
    ),
    responses(
        (status = 200, description = "Checklists visíveis para o ator", body = Vec<Report>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_reports(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reports = app_state.report_service.list(&actor, &query).await?;
    Ok(Json(reports))
}

// GET /api/reports/{id}
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "ID do checklist")),
    responses(
        (status = 200, description = "Checklist", body = Report),
        (status = 404, description = "Checklist não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_report(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.report_service.get(&actor, id).await?;
    Ok(Json(report))
}

// GET /api/reports/print?from=&to=&vehicleId=&location=
// A tela de impressão do front virou este PDF, com o mesmo contrato de query.
#[utoipa::path(
    get,
    path = "/api/reports/print",
    tag = "Reports",
    params(
        ("from" = Option<String>, Query, description = "Data inicial (AAAA-MM-DD)"),
        ("to" = Option<String>, Query, description = "Data final (AAAA-MM-DD)"),
        ("vehicleId" = Option<String>, Query, description = "Número de casco"),
        ("location" = Option<String>, Query, description = "Local (só para admins globais)")
    ),
    responses(
        (status = 200, description = "Recap em PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 500, description = "Falha ao renderizar o documento")
    ),
    security(("api_jwt" = []))
)]
pub async fn print_recap(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reports = app_state.report_service.list(&actor, &query).await?;
    let pdf = app_state
        .document_service
        .render_checklist_recap(&reports, &query)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"recap-checklist.pdf\"".to_string(),
            ),
        ],
        pdf,
    ))
}

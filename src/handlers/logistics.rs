// src/handlers/logistics.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedActor,
        roles::{AdminOnly, RequireRole},
    },
    models::logistics::{
        CreateLocationPayload, CreateRitasiPayload, JobMixFormula, Location, RitasiLog,
        RitasiQuery, UpdateRitasiLegsPayload, UpsertJobMixPayload,
    },
};

// POST /api/ritasi - abre a viagem (saída do BP carimbada agora)
#[utoipa::path(
    post,
    path = "/api/ritasi",
    tag = "Logistics",
    request_body = CreateRitasiPayload,
    responses(
        (status = 201, description = "Ritasi aberta", body = RitasiLog),
        (status = 403, description = "Veículo fora do escopo do ator")
    ),
    security(("api_jwt" = []))
)]
pub async fn open_ritasi(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<CreateRitasiPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let log = app_state.logistics_service.open_ritasi(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

// PUT /api/ritasi/{id}/legs - carimba as pernas seguintes da viagem
#[utoipa::path(
    put,
    path = "/api/ritasi/{id}/legs",
    tag = "Logistics",
    request_body = UpdateRitasiLegsPayload,
    params(("id" = Uuid, Path, description = "ID da ritasi")),
    responses(
        (status = 200, description = "Ritasi atualizada", body = RitasiLog),
        (status = 404, description = "Ritasi não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn stamp_ritasi_legs(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRitasiLegsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let log = app_state
        .logistics_service
        .stamp_ritasi_legs(&actor, id, payload)
        .await?;
    Ok(Json(log))
}

// GET /api/ritasi?from=&to=
#[utoipa::path(
    get,
    path = "/api/ritasi",
    tag = "Logistics",
    params(
        ("from" = Option<String>, Query, description = "Data inicial (AAAA-MM-DD)"),
        ("to" = Option<String>, Query, description = "Data final (AAAA-MM-DD)")
    ),
    responses(
        (status = 200, description = "Ritasi visíveis para o ator", body = Vec<RitasiLog>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_ritasi(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(query): Query<RitasiQuery>,
) -> Result<impl IntoResponse, AppError> {
    let logs = app_state.logistics_service.list_ritasi(&actor, &query).await?;
    Ok(Json(logs))
}

// GET /api/job-mix
#[utoipa::path(
    get,
    path = "/api/job-mix",
    tag = "Logistics",
    responses((status = 200, description = "Traços cadastrados", body = Vec<JobMixFormula>)),
    security(("api_jwt" = []))
)]
pub async fn list_job_mixes(
    State(app_state): State<AppState>,
    AuthenticatedActor(_actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let mixes = app_state.logistics_service.list_job_mixes().await?;
    Ok(Json(mixes))
}

// POST /api/job-mix
#[utoipa::path(
    post,
    path = "/api/job-mix",
    tag = "Logistics",
    request_body = UpsertJobMixPayload,
    responses(
        (status = 201, description = "Traço cadastrado", body = JobMixFormula),
        (status = 409, description = "Código de traço já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_job_mix(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Json(payload): Json<UpsertJobMixPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mix = app_state.logistics_service.create_job_mix(payload).await?;
    Ok((StatusCode::CREATED, Json(mix)))
}

// PUT /api/job-mix/{id}
#[utoipa::path(
    put,
    path = "/api/job-mix/{id}",
    tag = "Logistics",
    request_body = UpsertJobMixPayload,
    params(("id" = Uuid, Path, description = "ID do traço")),
    responses(
        (status = 200, description = "Traço atualizado", body = JobMixFormula),
        (status = 404, description = "Traço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_job_mix(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertJobMixPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let mix = app_state.logistics_service.update_job_mix(id, payload).await?;
    Ok(Json(mix))
}

// DELETE /api/job-mix/{id}
#[utoipa::path(
    delete,
    path = "/api/job-mix/{id}",
    tag = "Logistics",
    params(("id" = Uuid, Path, description = "ID do traço")),
    responses(
        (status = 204, description = "Traço removido"),
        (status = 404, description = "Traço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_job_mix(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.logistics_service.delete_job_mix(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/locations
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "Logistics",
    responses((status = 200, description = "Locais cadastrados", body = Vec<Location>)),
    security(("api_jwt" = []))
)]
pub async fn list_locations(
    State(app_state): State<AppState>,
    AuthenticatedActor(_actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let locations = app_state.logistics_service.list_locations().await?;
    Ok(Json(locations))
}

// POST /api/locations
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = "Logistics",
    request_body = CreateLocationPayload,
    responses(
        (status = 201, description = "Local cadastrado", body = Location),
        (status = 409, description = "Nome de local já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_location(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Json(payload): Json<CreateLocationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let location = app_state.logistics_service.create_location(payload).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

// DELETE /api/locations/{id}
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = "Logistics",
    params(("id" = Uuid, Path, description = "ID do local")),
    responses(
        (status = 204, description = "Local removido"),
        (status = 404, description = "Local não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_location(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.logistics_service.delete_location(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// src/handlers/vehicles.rs

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
    middleware::{
        auth::AuthenticatedActor,
        roles::{AdminOnly, RequireRole},
    },
    models::vehicle::{UpsertVehiclePayload, Vehicle},
};

// GET /api/vehicles - qualquer ator autenticado, já escopado
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Vehicles",
    responses(
        (status = 200, description = "Veículos visíveis para o ator", body = Vec<Vehicle>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = app_state.vehicle_service.list(&actor).await?;
    Ok(Json(vehicles))
}

// POST /api/vehicles
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = "Vehicles",
    request_body = UpsertVehiclePayload,
    responses(
        (status = 201, description = "Veículo cadastrado", body = Vehicle),
        (status = 409, description = "Número de casco já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_vehicle(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Json(payload): Json<UpsertVehiclePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state.vehicle_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

// PUT /api/vehicles/{id}
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    request_body = UpsertVehiclePayload,
    params(("id" = Uuid, Path, description = "ID do veículo")),
    responses(
        (status = 200, description = "Veículo atualizado", body = Vehicle),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_vehicle(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertVehiclePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state.vehicle_service.update(id, payload).await?;
    Ok(Json(vehicle))
}

// DELETE /api/vehicles/{id}
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = Uuid, Path, description = "ID do veículo")),
    responses(
        (status = 204, description = "Veículo removido"),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_vehicle(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vehicle_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

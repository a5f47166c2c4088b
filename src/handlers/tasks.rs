// src/handlers/tasks.rs

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
        roles::{RequireRole, StoreroomOnly, WorkshopOnly},
    },
    models::task::{
        CreateSparePartPayload, CreateTaskPayload, MechanicTask, SparePartLog, TaskDetail,
        TransitionTaskPayload,
    },
};

// POST /api/tasks - abre uma WO para veículo em dano/atenção
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "WO aberta", body = MechanicTask),
        (status = 422, description = "Veículo não está em dano/atenção")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    _guard: RequireRole<WorkshopOnly>,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state.task_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "WOs visíveis para o ator", body = Vec<MechanicTask>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let tasks = app_state.task_service.list(&actor).await?;
    Ok(Json(tasks))
}

// GET /api/tasks/{id} - detalhe com a pontualidade calculada
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da WO")),
    responses(
        (status = 200, description = "Detalhe da WO", body = TaskDetail),
        (status = 404, description = "WO não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state.task_service.detail(id).await?;
    Ok(Json(detail))
}

// PUT /api/tasks/{id}/status - transição da máquina de estados
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/status",
    tag = "Tasks",
    request_body = TransitionTaskPayload,
    params(("id" = Uuid, Path, description = "ID da WO")),
    responses(
        (status = 200, description = "WO atualizada", body = MechanicTask),
        (status = 422, description = "Transição não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn transition_task(
    State(app_state): State<AppState>,
    _guard: RequireRole<WorkshopOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransitionTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state.task_service.transition(id, payload).await?;
    Ok(Json(task))
}

// POST /api/spare-parts - um lançamento por WO
#[utoipa::path(
    post,
    path = "/api/spare-parts",
    tag = "Tasks",
    request_body = CreateSparePartPayload,
    responses(
        (status = 201, description = "Peças lançadas", body = SparePartLog),
        (status = 409, description = "Peças já lançadas para esta WO")
    ),
    security(("api_jwt" = []))
)]
pub async fn log_spare_parts(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    _guard: RequireRole<StoreroomOnly>,
    Json(payload): Json<CreateSparePartPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let log = app_state.task_service.log_spare_parts(&actor, payload).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

// GET /api/spare-parts
#[utoipa::path(
    get,
    path = "/api/spare-parts",
    tag = "Tasks",
    responses(
        (status = 200, description = "Lançamentos visíveis para o ator", body = Vec<SparePartLog>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_spare_parts(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let logs = app_state.task_service.list_spare_parts(&actor).await?;
    Ok(Json(logs))
}

// src/handlers/attendance.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedActor,
    models::attendance::{Attendance, AttendanceQuery, ClockPayload, TodayAttendance},
};

// POST /api/attendance/masuk - a janela é revalidada aqui, no submit
#[utoipa::path(
    post,
    path = "/api/attendance/masuk",
    tag = "Attendance",
    request_body = ClockPayload,
    responses(
        (status = 201, description = "Entrada registrada", body = Attendance),
        (status = 409, description = "Entrada já registrada hoje"),
        (status = 422, description = "Fora da janela de entrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn clock_masuk(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<ClockPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let attendance = app_state
        .attendance_service
        .clock_masuk(&actor, &payload.photo)
        .await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

// POST /api/attendance/pulang - exige entrada no mesmo dia
#[utoipa::path(
    post,
    path = "/api/attendance/pulang",
    tag = "Attendance",
    request_body = ClockPayload,
    responses(
        (status = 201, description = "Saída registrada", body = Attendance),
        (status = 409, description = "Saída já registrada hoje"),
        (status = 422, description = "Sem entrada hoje ou fora da janela de saída")
    ),
    security(("api_jwt" = []))
)]
pub async fn clock_pulang(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<ClockPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let attendance = app_state
        .attendance_service
        .clock_pulang(&actor, &payload.photo)
        .await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

// GET /api/attendance/today - estado do próprio dia
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    tag = "Attendance",
    responses(
        (status = 200, description = "Entrada/saída de hoje do próprio usuário", body = TodayAttendance)
    ),
    security(("api_jwt" = []))
)]
pub async fn today_attendance(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let today = app_state.attendance_service.today(&actor).await?;
    Ok(Json(today))
}

// GET /api/attendance?from=&to=
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    params(
        ("from" = Option<String>, Query, description = "Data inicial (AAAA-MM-DD)"),
        ("to" = Option<String>, Query, description = "Data final (AAAA-MM-DD)")
    ),
    responses(
        (status = 200, description = "Registros visíveis para o ator", body = Vec<Attendance>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_attendance(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let attendances = app_state.attendance_service.list(&actor, &query).await?;
    Ok(Json(attendances))
}

// src/handlers/feedback.rs

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
    models::feedback::{Complaint, CreateFeedbackPayload, Notification, Suggestion},
};

// POST /api/complaints
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = "Feedback",
    request_body = CreateFeedbackPayload,
    responses((status = 201, description = "Reclamação registrada", body = Complaint)),
    security(("api_jwt" = []))
)]
pub async fn create_complaint(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<CreateFeedbackPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let complaint = app_state
        .feedback_service
        .create_complaint(&actor, &payload.body)
        .await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

// GET /api/complaints
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = "Feedback",
    responses((status = 200, description = "Reclamações visíveis", body = Vec<Complaint>)),
    security(("api_jwt" = []))
)]
pub async fn list_complaints(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let complaints = app_state.feedback_service.list_complaints(&actor).await?;
    Ok(Json(complaints))
}

// DELETE /api/complaints/{id} - moderação é papel de admin
#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    tag = "Feedback",
    params(("id" = Uuid, Path, description = "ID da reclamação")),
    responses(
        (status = 204, description = "Reclamação removida"),
        (status = 404, description = "Reclamação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_complaint(
    State(app_state): State<AppState>,
    _guard: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.feedback_service.delete_complaint(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/suggestions
#[utoipa::path(
    post,
    path = "/api/suggestions",
    tag = "Feedback",
    request_body = CreateFeedbackPayload,
    responses((status = 201, description = "Sugestão registrada", body = Suggestion)),
    security(("api_jwt" = []))
)]
pub async fn create_suggestion(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(payload): Json<CreateFeedbackPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let suggestion = app_state
        .feedback_service
        .create_suggestion(&actor, &payload.body)
        .await?;
    Ok((StatusCode::CREATED, Json(suggestion)))
}

// GET /api/suggestions
#[utoipa::path(
    get,
    path = "/api/suggestions",
    tag = "Feedback",
    responses((status = 200, description = "Sugestões visíveis", body = Vec<Suggestion>)),
    security(("api_jwt" = []))
)]
pub async fn list_suggestions(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let suggestions = app_state.feedback_service.list_suggestions(&actor).await?;
    Ok(Json(suggestions))
}

// GET /api/notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Feedback",
    responses((status = 200, description = "Notificações do ator", body = Vec<Notification>)),
    security(("api_jwt" = []))
)]
pub async fn list_notifications(
    State(app_state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
) -> Result<impl IntoResponse, AppError> {
    let notifications = app_state.feedback_service.list_notifications(&actor).await?;
    Ok(Json(notifications))
}

// PUT /api/notifications/{id}/read
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = "Feedback",
    params(("id" = Uuid, Path, description = "ID da notificação")),
    responses(
        (status = 200, description = "Notificação marcada como lida", body = Notification),
        (status = 404, description = "Notificação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_notification_read(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let notification = app_state
        .feedback_service
        .mark_notification_read(id)
        .await?;
    Ok(Json(notification))
}

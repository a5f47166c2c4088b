// src/models/feedback.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::auth::Role;

// Reclamação registrada por um usuário de campo
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub author_name: String,
    pub location: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

// Sugestão - mesmo formato, coleção separada
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: Uuid,
    pub author_name: String,
    pub location: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackPayload {
    #[validate(length(min = 1, message = "O texto é obrigatório."))]
    pub body: String,
}

// Notificação interna (ex.: veículo danificado aguardando oficina)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub target_role: Option<Role>,
    pub target_location: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

// src/models/penalty.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Lançamento de penalidade - ledger append-only, nunca editado
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_nik: Option<String>,
    pub vehicle_hull: Option<String>,
    #[schema(example = 3)]
    pub points: i32,
    pub reason: String,
    pub given_by_admin: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePenaltyPayload {
    pub user_id: Uuid,
    pub vehicle_hull: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Os pontos devem estar entre 1 e 10."))]
    pub points: i32,
    #[validate(length(min = 1, message = "O motivo é obrigatório."))]
    pub reason: String,
}

// Total de pontos por usuário (soma pura do ledger)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PenaltySummary {
    pub user_id: Uuid,
    pub user_name: String,
    pub total_points: i64,
}

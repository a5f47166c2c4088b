// src/models/attendance.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Tipo do registro de ponto: entrada ("masuk") ou saída ("pulang")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "attendance_kind", rename_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceKind {
    Masuk,
    Pulang,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub kind: AttendanceKind,
    // "Tepat Waktu" / "Terlambat" para entrada; vazio para saída
    #[schema(example = "Tepat Waktu")]
    pub status: String,
    pub location: String,
    // Foto capturada no ponto, como data URI base64
    pub photo: String,
    pub timestamp: DateTime<Utc>,
    pub attend_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClockPayload {
    #[validate(length(min = 1, message = "A foto do registro é obrigatória."))]
    pub photo: String,
}

// O estado de hoje do próprio usuário (alimenta os botões de entrada/saída)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodayAttendance {
    pub masuk: Option<Attendance>,
    pub pulang: Option<Attendance>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

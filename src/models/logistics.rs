// src/models/logistics.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Uma ritasi: ciclo completo de viagem do truck mixer
// (saída do BP -> chegada na obra -> retorno).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RitasiLog {
    pub id: Uuid,
    #[schema(example = "TM-014")]
    pub vehicle_hull: String,
    pub operator_name: String,
    pub location: String,
    pub project_name: String,
    #[schema(value_type = String, example = "7.00")]
    pub volume_m3: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub return_departure_time: Option<DateTime<Utc>>,
    pub return_arrival_time: Option<DateTime<Utc>>,
    pub log_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRitasiPayload {
    #[validate(length(min = 1, message = "O número de casco é obrigatório."))]
    pub vehicle_hull: String,
    #[validate(length(min = 1, message = "O nome da obra é obrigatório."))]
    pub project_name: String,
    #[schema(value_type = String, example = "7.00")]
    pub volume_m3: Decimal,
}

// Pernas posteriores da viagem, carimbadas conforme acontecem
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRitasiLegsPayload {
    pub arrival_time: Option<DateTime<Utc>>,
    pub return_departure_time: Option<DateTime<Utc>>,
    pub return_arrival_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RitasiQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// Traço de concreto (job mix formula), quantidades por m³
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobMixFormula {
    pub id: Uuid,
    #[schema(example = "K-300")]
    pub code: String,
    pub description: String,
    #[schema(example = 120)]
    pub slump_mm: i32,
    #[schema(value_type = String, example = "413.00")]
    pub semen_kg: Decimal,
    #[schema(value_type = String, example = "681.00")]
    pub pasir_kg: Decimal,
    #[schema(value_type = String, example = "1021.00")]
    pub batu_kg: Decimal,
    #[schema(value_type = String, example = "215.00")]
    pub air_liter: Decimal,
    #[schema(value_type = String, example = "1.20")]
    pub admixture_liter: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertJobMixPayload {
    #[validate(length(min = 1, message = "O código do traço é obrigatório."))]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, max = 300, message = "Slump fora da faixa (0-300 mm)."))]
    pub slump_mm: i32,
    #[schema(value_type = String)]
    pub semen_kg: Decimal,
    #[schema(value_type = String)]
    pub pasir_kg: Decimal,
    #[schema(value_type = String)]
    pub batu_kg: Decimal,
    #[schema(value_type = String)]
    pub air_liter: Decimal,
    #[serde(default)]
    #[schema(value_type = String)]
    pub admixture_liter: Decimal,
}

// Local físico (batching plant)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    #[schema(example = "BP Pekanbaru")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationPayload {
    #[validate(length(min = 1, message = "O nome do local é obrigatório."))]
    pub name: String,
}

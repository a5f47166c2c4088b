// src/models/report.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Status de cada item do checklist, com os valores literais usados em campo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemStatus {
    #[serde(rename = "BAIK")]
    Baik,
    #[serde(rename = "RUSAK")]
    Rusak,
    #[serde(rename = "PERLU PERHATIAN")]
    PerluPerhatian,
}

impl ItemStatus {
    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Baik => "BAIK",
            ItemStatus::Rusak => "RUSAK",
            ItemStatus::PerluPerhatian => "PERLU PERHATIAN",
        }
    }
}

// Status geral derivado do checklist (persistido junto com o report)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "Damaged")]
    Damaged,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Good => "Good",
            ReportStatus::NeedsAttention => "Needs Attention",
            ReportStatus::Damaged => "Damaged",
        }
    }
}

// Um item inspecionado do checklist diário
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    #[schema(example = "oli_mesin")]
    pub id: String,
    #[schema(example = "Oli Mesin")]
    pub label: String,
    pub status: ItemStatus,
    // Observação livre do operador
    #[serde(default)]
    pub keterangan: String,
    // Foto opcional como data URI base64
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

// Dano avulso fora da lista de itens
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KerusakanLain {
    pub keterangan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

// Um envio de checklist diário. Imutável depois de criado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    #[schema(example = "TM-014")]
    pub vehicle_hull: String,
    pub operator_name: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    // Chave de dedup diário
    pub report_date: NaiveDate,
    #[schema(value_type = Vec<ChecklistItem>)]
    pub items: sqlx::types::Json<Vec<ChecklistItem>>,
    #[schema(value_type = Option<KerusakanLain>)]
    pub kerusakan_lain: Option<sqlx::types::Json<KerusakanLain>>,
    pub overall_status: ReportStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportPayload {
    #[validate(length(min = 1, message = "O número de casco é obrigatório."))]
    pub vehicle_hull: String,
    #[validate(length(min = 1, message = "O checklist precisa de pelo menos um item."))]
    pub items: Vec<ChecklistItem>,
    pub kerusakan_lain: Option<KerusakanLain>,
}

// Filtros de listagem (intervalo de datas + veículo), vindos da query string
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub vehicle_id: Option<String>,
    // Estreitamento extra para admins globais; escopo do ator sempre vence
    pub location: Option<String>,
}

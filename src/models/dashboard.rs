// src/models/dashboard.rs

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::status::DerivedStatus;
use crate::models::vehicle::Vehicle;

// 1. Resumo do dia (os cards do topo)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub vehicles_good: i64,
    pub vehicles_needs_attention: i64,
    pub vehicles_damaged: i64,
    pub vehicles_not_checked: i64,
    pub attendance_today: i64,
    pub tasks_pending: i64,
    pub tasks_in_progress: i64,
    pub tasks_delayed: i64,
}

// 2. Linha do quadro de status da frota
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusBoardEntry {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub derived_status: DerivedStatus,
    pub last_report_date: Option<NaiveDate>,
}

// src/models/task.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Status da ordem de serviço (WO) do mecânico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Delayed,
}

impl TaskStatus {
    // Máquina de estados da WO:
    // PENDING -> IN_PROGRESS -> COMPLETED (terminal);
    // qualquer estado não concluído -> DELAYED;
    // DELAYED -> PENDING | IN_PROGRESS | COMPLETED.
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        use TaskStatus::*;
        match (self, next) {
            (Completed, _) => false,
            (current, Delayed) => current != Delayed,
            (Pending, InProgress) => true,
            (InProgress, Completed) => true,
            (Delayed, Pending) | (Delayed, InProgress) | (Delayed, Completed) => true,
            _ => false,
        }
    }
}

// Mecânico atribuído - par id+nome congelado no momento da criação,
// não é chave estrangeira viva.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignedMechanic {
    pub id: Uuid,
    #[schema(example = "Agus Wijaya")]
    pub name: String,
}

// Ordem de serviço com o snapshot do veículo embutido
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MechanicTask {
    pub id: Uuid,
    #[schema(example = "TM-014")]
    pub hull_number: String,
    pub license_plate: String,
    pub repair_description: String,
    pub target_date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub target_time: NaiveTime,
    // Report que originou a WO, quando houver
    pub triggering_report_id: Option<Uuid>,
    #[schema(value_type = Vec<AssignedMechanic>)]
    pub mechanics: sqlx::types::Json<Vec<AssignedMechanic>>,
    pub status: TaskStatus,
    pub delay_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

// Detalhe da WO com a classificação de pontualidade (quando concluída)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: MechanicTask,
    #[schema(example = "Late by 0 jam 47 menit")]
    pub completion_timing: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "O número de casco é obrigatório."))]
    pub hull_number: String,
    #[validate(length(min = 5, message = "Descreva o reparo (mínimo 5 caracteres)."))]
    pub repair_description: String,
    pub target_date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub target_time: NaiveTime,
    pub triggering_report_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Atribua pelo menos um mecânico."))]
    pub mechanics: Vec<AssignedMechanic>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTaskPayload {
    pub status: TaskStatus,
    // Obrigatório (mínimo 10 caracteres) quando o novo status é DELAYED
    pub delay_reason: Option<String>,
}

// Lançamento de peças usadas numa WO concluída
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SparePartLog {
    pub id: Uuid,
    pub task_id: Uuid,
    pub vehicle_hull: String,
    pub parts_used: String,
    pub log_date: NaiveDate,
    pub logged_by_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSparePartPayload {
    pub task_id: Uuid,
    #[validate(length(min = 1, message = "Informe as peças utilizadas."))]
    pub parts_used: String,
}

#[cfg(test)]
mod tests {
    use super::TaskStatus::*;

    #[test]
    fn fluxo_feliz_da_wo() {
        assert!(Pending.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
    }

    #[test]
    fn pending_nao_pula_direto_para_completed() {
        assert!(!Pending.can_transition_to(Completed));
    }

    #[test]
    fn qualquer_estado_aberto_pode_atrasar() {
        assert!(Pending.can_transition_to(Delayed));
        assert!(InProgress.can_transition_to(Delayed));
        assert!(!Delayed.can_transition_to(Delayed));
    }

    #[test]
    fn delayed_pode_voltar_para_qualquer_estado() {
        assert!(Delayed.can_transition_to(Pending));
        assert!(Delayed.can_transition_to(InProgress));
        assert!(Delayed.can_transition_to(Completed));
    }

    #[test]
    fn completed_e_terminal() {
        for next in [Pending, InProgress, Completed, Delayed] {
            assert!(!Completed.can_transition_to(next));
        }
    }
}

// src/services/task_service.rs

use chrono::{Local, NaiveDateTime, Utc};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    db::{ReportRepository, TaskRepository, VehicleRepository},
    domain::{
        status::derive_vehicle_status,
        timing::classify_completion,
        visibility::{scope_for, VisibilityScope},
    },
    models::{
        auth::Actor,
        task::{
            CreateSparePartPayload, CreateTaskPayload, MechanicTask, SparePartLog, TaskDetail,
            TaskStatus, TransitionTaskPayload,
        },
    },
};

#[derive(Clone)]
pub struct TaskService {
    task_repo: TaskRepository,
    vehicle_repo: VehicleRepository,
    report_repo: ReportRepository,
}

impl TaskService {
    pub fn new(
        task_repo: TaskRepository,
        vehicle_repo: VehicleRepository,
        report_repo: ReportRepository,
    ) -> Self {
        Self {
            task_repo,
            vehicle_repo,
            report_repo,
        }
    }

    // Abertura de WO: só para veículo atualmente em dano/atenção
    pub async fn create(&self, payload: CreateTaskPayload) -> Result<MechanicTask, AppError> {
        let vehicle = self
            .vehicle_repo
            .find_by_hull(&payload.hull_number)
            .await?
            .ok_or(AppError::NotFound("Veículo"))?;

        let latest = self.report_repo.latest_for_hull(&vehicle.hull_number).await?;
        let derived = derive_vehicle_status(latest, Local::now().date_naive());
        if !derived.needs_workshop() {
            return Err(AppError::VehicleNotInWorkshopState);
        }

        let task = self
            .task_repo
            .insert(
                &vehicle.hull_number,
                &vehicle.license_plate,
                &payload.repair_description,
                payload.target_date,
                payload.target_time,
                payload.triggering_report_id,
                sqlx::types::Json(payload.mechanics),
            )
            .await?;

        tracing::info!("🔧 WO aberta para {} ({})", task.hull_number, task.license_plate);
        Ok(task)
    }

    // Transição da máquina de estados. COMPLETED é terminal de verdade:
    // aqui o backend É a camada de dados, então a regra deixa de ser só de UI.
    pub async fn transition(
        &self,
        id: Uuid,
        payload: TransitionTaskPayload,
    ) -> Result<MechanicTask, AppError> {
        let task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Ordem de serviço"))?;

        let next = payload.status;
        if !task.status.can_transition_to(next) {
            return Err(AppError::InvalidTaskTransition(format!(
                "de {:?} para {:?}",
                task.status, next
            )));
        }

        // Atraso exige motivo substantivo
        let delay_reason = if next == TaskStatus::Delayed {
            let reason = payload.delay_reason.as_deref().unwrap_or("").trim();
            if reason.chars().count() < 10 {
                let mut errors = ValidationErrors::new();
                let mut err = ValidationError::new("length");
                err.message =
                    Some("Informe o motivo do atraso (mínimo 10 caracteres).".into());
                errors.add("delayReason", err);
                return Err(AppError::ValidationError(errors));
            }
            Some(reason.to_string())
        } else {
            task.delay_reason.clone()
        };

        // started_at é carimbado na PRIMEIRA entrada em IN_PROGRESS
        let started_at = match (next, task.started_at) {
            (TaskStatus::InProgress, None) => Some(Utc::now()),
            (_, existing) => existing,
        };
        let completed_at = if next == TaskStatus::Completed {
            Some(Utc::now())
        } else {
            task.completed_at
        };

        let updated = self
            .task_repo
            .update_status(id, next, delay_reason.as_deref(), started_at, completed_at)
            .await?;

        tracing::info!("🔧 WO {} agora está {:?}", updated.id, updated.status);
        Ok(updated)
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<MechanicTask>, AppError> {
        let scope = scope_for(actor);
        let (location, plates) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { plates, .. } => (None, Some(plates.as_slice())),
        };
        self.task_repo.list(location, plates).await
    }

    // Detalhe com a classificação de pontualidade (uma única implementação,
    // consumida por todas as telas)
    pub async fn detail(&self, id: Uuid) -> Result<TaskDetail, AppError> {
        let task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Ordem de serviço"))?;

        let completion_timing = task.completed_at.map(|completed| {
            let target = NaiveDateTime::new(task.target_date, task.target_time);
            let completed_local = completed.with_timezone(&Local).naive_local();
            classify_completion(target, completed_local)
        });

        Ok(TaskDetail {
            task,
            completion_timing,
        })
    }

    // --- Peças ---

    pub async fn log_spare_parts(
        &self,
        actor: &Actor,
        payload: CreateSparePartPayload,
    ) -> Result<SparePartLog, AppError> {
        let task = self
            .task_repo
            .find_by_id(payload.task_id)
            .await?
            .ok_or(AppError::NotFound("Ordem de serviço"))?;

        // O índice único em task_id rejeita o segundo lançamento
        self.task_repo
            .insert_spare_part(
                task.id,
                &task.hull_number,
                &payload.parts_used,
                Local::now().date_naive(),
                actor.name(),
            )
            .await
    }

    pub async fn list_spare_parts(&self, actor: &Actor) -> Result<Vec<SparePartLog>, AppError> {
        let scope = scope_for(actor);
        let (location, plates) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { plates, .. } => (None, Some(plates.as_slice())),
        };
        self.task_repo.list_spare_parts(location, plates).await
    }
}

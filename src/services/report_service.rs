// src/services/report_service.rs

use chrono::Local;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{FeedbackRepository, ReportRepository, VehicleRepository},
    domain::{
        status::derive_overall,
        visibility::{scope_for, VisibilityScope},
    },
    models::{
        auth::{Actor, Role},
        report::{Report, ReportQuery, ReportStatus, SubmitReportPayload},
    },
};

#[derive(Clone)]
pub struct ReportService {
    report_repo: ReportRepository,
    vehicle_repo: VehicleRepository,
    feedback_repo: FeedbackRepository,
    pool: PgPool,
}

impl ReportService {
    pub fn new(
        report_repo: ReportRepository,
        vehicle_repo: VehicleRepository,
        feedback_repo: FeedbackRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            report_repo,
            vehicle_repo,
            feedback_repo,
            pool,
        }
    }

    // Envio do checklist diário. Report é imutável: não existe update nem delete.
    pub async fn submit(&self, actor: &Actor, payload: SubmitReportPayload) -> Result<Report, AppError> {
        let vehicle = self
            .vehicle_repo
            .find_by_hull(&payload.vehicle_hull)
            .await?
            .ok_or(AppError::NotFound("Veículo"))?;

        // Operador só envia para veículo do próprio batangan;
        // papéis de local só dentro do próprio local.
        let scope = scope_for(actor);
        let allowed = match &scope {
            VisibilityScope::Own { .. } => scope.allows_plate(&vehicle.license_plate),
            _ => scope.allows_location(&vehicle.location),
        };
        if !allowed {
            return Err(AppError::Forbidden(
                "Este veículo está fora do seu escopo.".to_string(),
            ));
        }

        // Pré-checagem do dedup diário; o índice único segura a corrida
        let today = Local::now().date_naive();
        if self.report_repo.exists_for_day(&payload.vehicle_hull, today).await? {
            return Err(AppError::DuplicateDailyReport);
        }

        let overall_status = derive_overall(&payload.items, payload.kerusakan_lain.as_ref());

        // Report e notificação de oficina entram na mesma transação
        let mut tx = self.pool.begin().await?;

        let report = self
            .report_repo
            .insert(
                &mut *tx,
                &payload.vehicle_hull,
                actor.name(),
                &vehicle.location,
                today,
                sqlx::types::Json(payload.items),
                payload.kerusakan_lain.map(sqlx::types::Json),
                overall_status,
            )
            .await?;

        if overall_status != ReportStatus::Good {
            self.feedback_repo
                .insert_notification(
                    &mut *tx,
                    "Veículo aguardando oficina",
                    &format!(
                        "{} ({}) reportado como '{}' por {}.",
                        vehicle.hull_number,
                        vehicle.license_plate,
                        overall_status.label(),
                        actor.name()
                    ),
                    Some(Role::Mekanik),
                    Some(&vehicle.location),
                )
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "📋 Checklist de {} registrado como '{}'",
            report.vehicle_hull,
            overall_status.label()
        );

        Ok(report)
    }

    pub async fn list(&self, actor: &Actor, query: &ReportQuery) -> Result<Vec<Report>, AppError> {
        let scope = scope_for(actor);
        match &scope {
            VisibilityScope::All => {
                self.report_repo
                    .list(
                        query.from,
                        query.to,
                        query.vehicle_id.as_deref(),
                        query.location.as_deref(),
                        None,
                        &[],
                    )
                    .await
            }
            VisibilityScope::Location(location) => {
                self.report_repo
                    .list(
                        query.from,
                        query.to,
                        query.vehicle_id.as_deref(),
                        Some(location),
                        None,
                        &[],
                    )
                    .await
            }
            VisibilityScope::Own { name, plates, .. } => {
                let hulls = self.vehicle_repo.hulls_for_plates(plates).await?;
                self.report_repo
                    .list(
                        query.from,
                        query.to,
                        query.vehicle_id.as_deref(),
                        None,
                        Some(name),
                        &hulls,
                    )
                    .await
            }
        }
    }

    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<Report, AppError> {
        let report = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Checklist"))?;

        let scope = scope_for(actor);
        let visible = match &scope {
            VisibilityScope::All => true,
            VisibilityScope::Location(_) => scope.allows_location(&report.location),
            VisibilityScope::Own { plates, .. } => {
                if scope.allows_owner(None, Some(&report.operator_name)) {
                    true
                } else {
                    let hulls = self.vehicle_repo.hulls_for_plates(plates).await?;
                    hulls.contains(&report.vehicle_hull)
                }
            }
        };
        if !visible {
            return Err(AppError::Forbidden(
                "Este checklist está fora do seu escopo.".to_string(),
            ));
        }

        Ok(report)
    }
}

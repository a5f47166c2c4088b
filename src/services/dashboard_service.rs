// src/services/dashboard_service.rs

use std::collections::HashMap;

use chrono::Local;

use crate::{
    common::error::AppError,
    db::{AttendanceRepository, ReportRepository, TaskRepository, VehicleRepository},
    domain::{
        status::{derive_vehicle_status, DerivedStatus},
        visibility::{scope_for, VisibilityScope},
    },
    models::{
        auth::Actor,
        dashboard::{DashboardSummary, StatusBoardEntry},
        task::TaskStatus,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    vehicle_repo: VehicleRepository,
    report_repo: ReportRepository,
    attendance_repo: AttendanceRepository,
    task_repo: TaskRepository,
}

impl DashboardService {
    pub fn new(
        vehicle_repo: VehicleRepository,
        report_repo: ReportRepository,
        attendance_repo: AttendanceRepository,
        task_repo: TaskRepository,
    ) -> Self {
        Self {
            vehicle_repo,
            report_repo,
            attendance_repo,
            task_repo,
        }
    }

    // Quadro da frota: cada veículo visível com o status derivado do dia
    pub async fn status_board(&self, actor: &Actor) -> Result<Vec<StatusBoardEntry>, AppError> {
        let scope = scope_for(actor);
        let (location, plates) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { plates, .. } => (None, Some(plates.as_slice())),
        };

        let vehicles = self.vehicle_repo.list(location, plates).await?;
        let latest: HashMap<_, _> = self
            .report_repo
            .latest_per_hull()
            .await?
            .into_iter()
            .map(|(hull, status, date)| (hull, (status, date)))
            .collect();

        let today = Local::now().date_naive();
        let board = vehicles
            .into_iter()
            .map(|vehicle| {
                let last = latest.get(&vehicle.hull_number).copied();
                StatusBoardEntry {
                    derived_status: derive_vehicle_status(last, today),
                    last_report_date: last.map(|(_, date)| date),
                    vehicle,
                }
            })
            .collect();

        Ok(board)
    }

    // Os cards do topo do painel
    pub async fn summary(&self, actor: &Actor) -> Result<DashboardSummary, AppError> {
        let board = self.status_board(actor).await?;

        let mut summary = DashboardSummary {
            vehicles_good: 0,
            vehicles_needs_attention: 0,
            vehicles_damaged: 0,
            vehicles_not_checked: 0,
            attendance_today: 0,
            tasks_pending: 0,
            tasks_in_progress: 0,
            tasks_delayed: 0,
        };

        for entry in &board {
            match entry.derived_status {
                DerivedStatus::Good => summary.vehicles_good += 1,
                DerivedStatus::NeedsAttention => summary.vehicles_needs_attention += 1,
                DerivedStatus::Damaged => summary.vehicles_damaged += 1,
                DerivedStatus::NotChecked => summary.vehicles_not_checked += 1,
            }
        }

        let scope = scope_for(actor);
        let location = scope.location();
        let today = Local::now().date_naive();

        summary.attendance_today = self.attendance_repo.count_for_day(today, location).await?;
        summary.tasks_pending = self
            .task_repo
            .count_by_status(TaskStatus::Pending, location)
            .await?;
        summary.tasks_in_progress = self
            .task_repo
            .count_by_status(TaskStatus::InProgress, location)
            .await?;
        summary.tasks_delayed = self
            .task_repo
            .count_by_status(TaskStatus::Delayed, location)
            .await?;

        Ok(summary)
    }
}

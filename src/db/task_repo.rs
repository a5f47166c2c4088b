// src/db/task_repo.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::task::{AssignedMechanic, MechanicTask, SparePartLog, TaskStatus},
};

const TASK_COLUMNS: &str = "id, hull_number, license_plate, repair_description, target_date, \
                            target_time, triggering_report_id, mechanics, status, delay_reason, \
                            created_at, started_at, completed_at";

const TASK_COLUMNS_T: &str = "t.id, t.hull_number, t.license_plate, t.repair_description, \
                              t.target_date, t.target_time, t.triggering_report_id, t.mechanics, \
                              t.status, t.delay_reason, t.created_at, t.started_at, t.completed_at";

const SPARE_PART_COLUMNS: &str =
    "id, task_id, vehicle_hull, parts_used, log_date, logged_by_name, created_at";

// Repositório das ordens de serviço (WO) e dos lançamentos de peças
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MechanicTask>, AppError> {
        let task = sqlx::query_as::<_, MechanicTask>(&format!(
            "SELECT {TASK_COLUMNS} FROM mechanic_tasks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    // O local da WO é resolvido pelo veículo (a WO só guarda o casco)
    pub async fn list(
        &self,
        location: Option<&str>,
        plates: Option<&[String]>,
    ) -> Result<Vec<MechanicTask>, AppError> {
        let tasks = sqlx::query_as::<_, MechanicTask>(&format!(
            "SELECT {TASK_COLUMNS_T} FROM mechanic_tasks t \
             LEFT JOIN vehicles v ON v.hull_number = t.hull_number \
             WHERE ($1::text IS NULL OR v.location = $1) \
               AND ($2::text[] IS NULL OR t.license_plate = ANY($2)) \
             ORDER BY t.created_at DESC"
        ))
        .bind(location)
        .bind(plates)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        hull_number: &str,
        license_plate: &str,
        repair_description: &str,
        target_date: NaiveDate,
        target_time: NaiveTime,
        triggering_report_id: Option<Uuid>,
        mechanics: sqlx::types::Json<Vec<AssignedMechanic>>,
    ) -> Result<MechanicTask, AppError> {
        let task = sqlx::query_as::<_, MechanicTask>(&format!(
            "INSERT INTO mechanic_tasks \
                (hull_number, license_plate, repair_description, target_date, target_time, \
                 triggering_report_id, mechanics) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(hull_number)
        .bind(license_plate)
        .bind(repair_description)
        .bind(target_date)
        .bind(target_time)
        .bind(triggering_report_id)
        .bind(mechanics)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    // Atualização da transição de status, já com os carimbos calculados
    pub async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        delay_reason: Option<&str>,
        started_at: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<MechanicTask, AppError> {
        let task = sqlx::query_as::<_, MechanicTask>(&format!(
            "UPDATE mechanic_tasks SET \
                status = $2, delay_reason = $3, started_at = $4, completed_at = $5 \
             WHERE id = $1 \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(delay_reason)
        .bind(started_at)
        .bind(completed_at)
        .fetch_optional(&self.pool)
        .await?;
        task.ok_or(AppError::NotFound("Ordem de serviço"))
    }

    pub async fn count_by_status(
        &self,
        status: TaskStatus,
        location: Option<&str>,
    ) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM mechanic_tasks t \
             LEFT JOIN vehicles v ON v.hull_number = t.hull_number \
             WHERE t.status = $1 AND ($2::text IS NULL OR v.location = $2)",
        )
        .bind(status)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // --- Peças (spare parts) ---

    pub async fn insert_spare_part(
        &self,
        task_id: Uuid,
        vehicle_hull: &str,
        parts_used: &str,
        log_date: NaiveDate,
        logged_by_name: &str,
    ) -> Result<SparePartLog, AppError> {
        let log = sqlx::query_as::<_, SparePartLog>(&format!(
            "INSERT INTO spare_part_logs (task_id, vehicle_hull, parts_used, log_date, logged_by_name) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {SPARE_PART_COLUMNS}"
        ))
        .bind(task_id)
        .bind(vehicle_hull)
        .bind(parts_used)
        .bind(log_date)
        .bind(logged_by_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("idx_spare_part_logs_task")
                {
                    return AppError::DuplicateSparePartLog;
                }
            }
            e.into()
        })?;
        Ok(log)
    }

    pub async fn list_spare_parts(
        &self,
        location: Option<&str>,
        plates: Option<&[String]>,
    ) -> Result<Vec<SparePartLog>, AppError> {
        let logs = sqlx::query_as::<_, SparePartLog>(
            "SELECT s.id, s.task_id, s.vehicle_hull, s.parts_used, s.log_date, \
                    s.logged_by_name, s.created_at \
             FROM spare_part_logs s \
             LEFT JOIN vehicles v ON v.hull_number = s.vehicle_hull \
             WHERE ($1::text IS NULL OR v.location = $1) \
               AND ($2::text[] IS NULL OR v.license_plate = ANY($2)) \
             ORDER BY s.created_at DESC",
        )
        .bind(location)
        .bind(plates)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }
}

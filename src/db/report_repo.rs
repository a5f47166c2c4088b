// src/db/report_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::report::{ChecklistItem, KerusakanLain, Report, ReportStatus},
};

const REPORT_COLUMNS: &str = "id, vehicle_hull, operator_name, location, \"timestamp\", \
                              report_date, items, kerusakan_lain, overall_status";

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>, AppError> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(report)
    }

    // Pré-checagem do dedup diário (o índice único ainda é a garantia final)
    pub async fn exists_for_day(
        &self,
        vehicle_hull: &str,
        report_date: NaiveDate,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM reports WHERE vehicle_hull = $1 AND report_date = $2)",
        )
        .bind(vehicle_hull)
        .bind(report_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    // Checklist mais recente do veículo (insumo do status derivado)
    pub async fn latest_for_hull(
        &self,
        vehicle_hull: &str,
    ) -> Result<Option<(ReportStatus, NaiveDate)>, AppError> {
        let latest = sqlx::query_as::<_, (ReportStatus, NaiveDate)>(
            "SELECT overall_status, report_date FROM reports \
             WHERE vehicle_hull = $1 \
             ORDER BY \"timestamp\" DESC \
             LIMIT 1",
        )
        .bind(vehicle_hull)
        .fetch_optional(&self.pool)
        .await?;
        Ok(latest)
    }

    // Versão em lote para o quadro de status da frota
    pub async fn latest_per_hull(
        &self,
    ) -> Result<Vec<(String, ReportStatus, NaiveDate)>, AppError> {
        let rows = sqlx::query_as::<_, (String, ReportStatus, NaiveDate)>(
            "SELECT DISTINCT ON (vehicle_hull) vehicle_hull, overall_status, report_date \
             FROM reports \
             ORDER BY vehicle_hull, \"timestamp\" DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // Listagem com todos os filtros de escopo e de query string
    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        vehicle_hull: Option<&str>,
        location: Option<&str>,
        owner_name: Option<&str>,
        owner_hulls: &[String],
    ) -> Result<Vec<Report>, AppError> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE ($1::date IS NULL OR report_date >= $1) \
               AND ($2::date IS NULL OR report_date <= $2) \
               AND ($3::text IS NULL OR vehicle_hull = $3) \
               AND ($4::text IS NULL OR location = $4) \
               AND ($5::text IS NULL OR operator_name = $5 OR vehicle_hull = ANY($6)) \
             ORDER BY \"timestamp\" DESC"
        ))
        .bind(from)
        .bind(to)
        .bind(vehicle_hull)
        .bind(location)
        .bind(owner_name)
        .bind(owner_hulls)
        .fetch_all(&self.pool)
        .await?;
        Ok(reports)
    }

    // Insert participa da transação do envio (report + notificação juntos)
    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        vehicle_hull: &str,
        operator_name: &str,
        location: &str,
        report_date: NaiveDate,
        items: sqlx::types::Json<Vec<ChecklistItem>>,
        kerusakan_lain: Option<sqlx::types::Json<KerusakanLain>>,
        overall_status: ReportStatus,
    ) -> Result<Report, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let report = sqlx::query_as::<_, Report>(&format!(
            "INSERT INTO reports \
                (vehicle_hull, operator_name, location, report_date, items, kerusakan_lain, overall_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {REPORT_COLUMNS}"
        ))
        .bind(vehicle_hull)
        .bind(operator_name)
        .bind(location)
        .bind(report_date)
        .bind(items)
        .bind(kerusakan_lain)
        .bind(overall_status)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // O índice único fecha a janela de corrida do read-then-write
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("idx_reports_vehicle_day")
                {
                    return AppError::DuplicateDailyReport;
                }
            }
            e.into()
        })?;

        Ok(report)
    }
}

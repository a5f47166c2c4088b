// src/db/logistics_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::logistics::{JobMixFormula, Location, RitasiLog},
};

const RITASI_COLUMNS: &str = "id, vehicle_hull, operator_name, location, project_name, volume_m3, \
                              departure_time, arrival_time, return_departure_time, \
                              return_arrival_time, log_date";

const JOB_MIX_COLUMNS: &str = "id, code, description, slump_mm, semen_kg, pasir_kg, batu_kg, \
                               air_liter, admixture_liter, created_at";

// Ritasi, traços de concreto e locais
#[derive(Clone)]
pub struct LogisticsRepository {
    pool: PgPool,
}

impl LogisticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Ritasi ---

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_ritasi(
        &self,
        vehicle_hull: &str,
        operator_name: &str,
        location: &str,
        project_name: &str,
        volume_m3: Decimal,
        departure_time: DateTime<Utc>,
        log_date: NaiveDate,
    ) -> Result<RitasiLog, AppError> {
        let log = sqlx::query_as::<_, RitasiLog>(&format!(
            "INSERT INTO ritasi_logs \
                (vehicle_hull, operator_name, location, project_name, volume_m3, departure_time, log_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {RITASI_COLUMNS}"
        ))
        .bind(vehicle_hull)
        .bind(operator_name)
        .bind(location)
        .bind(project_name)
        .bind(volume_m3)
        .bind(departure_time)
        .bind(log_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(log)
    }

    pub async fn find_ritasi(&self, id: Uuid) -> Result<Option<RitasiLog>, AppError> {
        let log = sqlx::query_as::<_, RitasiLog>(&format!(
            "SELECT {RITASI_COLUMNS} FROM ritasi_logs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(log)
    }

    // Carimba só as pernas ainda vazias (a viagem nunca anda para trás)
    pub async fn update_ritasi_legs(
        &self,
        id: Uuid,
        arrival_time: Option<DateTime<Utc>>,
        return_departure_time: Option<DateTime<Utc>>,
        return_arrival_time: Option<DateTime<Utc>>,
    ) -> Result<RitasiLog, AppError> {
        let log = sqlx::query_as::<_, RitasiLog>(&format!(
            "UPDATE ritasi_logs SET \
                arrival_time = COALESCE(arrival_time, $2), \
                return_departure_time = COALESCE(return_departure_time, $3), \
                return_arrival_time = COALESCE(return_arrival_time, $4) \
             WHERE id = $1 \
             RETURNING {RITASI_COLUMNS}"
        ))
        .bind(id)
        .bind(arrival_time)
        .bind(return_departure_time)
        .bind(return_arrival_time)
        .fetch_optional(&self.pool)
        .await?;
        log.ok_or(AppError::NotFound("Ritasi"))
    }

    pub async fn list_ritasi(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        location: Option<&str>,
        owner_name: Option<&str>,
    ) -> Result<Vec<RitasiLog>, AppError> {
        let logs = sqlx::query_as::<_, RitasiLog>(&format!(
            "SELECT {RITASI_COLUMNS} FROM ritasi_logs \
             WHERE ($1::date IS NULL OR log_date >= $1) \
               AND ($2::date IS NULL OR log_date <= $2) \
               AND ($3::text IS NULL OR location = $3) \
               AND ($4::text IS NULL OR operator_name = $4) \
             ORDER BY departure_time DESC"
        ))
        .bind(from)
        .bind(to)
        .bind(location)
        .bind(owner_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    // --- Traços (job mix) ---

    pub async fn list_job_mixes(&self) -> Result<Vec<JobMixFormula>, AppError> {
        let mixes = sqlx::query_as::<_, JobMixFormula>(&format!(
            "SELECT {JOB_MIX_COLUMNS} FROM job_mix_formulas ORDER BY code"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(mixes)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_job_mix(
        &self,
        code: &str,
        description: &str,
        slump_mm: i32,
        semen_kg: Decimal,
        pasir_kg: Decimal,
        batu_kg: Decimal,
        air_liter: Decimal,
        admixture_liter: Decimal,
    ) -> Result<JobMixFormula, AppError> {
        let mix = sqlx::query_as::<_, JobMixFormula>(&format!(
            "INSERT INTO job_mix_formulas \
                (code, description, slump_mm, semen_kg, pasir_kg, batu_kg, air_liter, admixture_liter) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {JOB_MIX_COLUMNS}"
        ))
        .bind(code)
        .bind(description)
        .bind(slump_mm)
        .bind(semen_kg)
        .bind(pasir_kg)
        .bind(batu_kg)
        .bind(air_liter)
        .bind(admixture_liter)
        .fetch_one(&self.pool)
        .await
        .map_err(map_logistics_unique_violation)?;
        Ok(mix)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_job_mix(
        &self,
        id: Uuid,
        code: &str,
        description: &str,
        slump_mm: i32,
        semen_kg: Decimal,
        pasir_kg: Decimal,
        batu_kg: Decimal,
        air_liter: Decimal,
        admixture_liter: Decimal,
    ) -> Result<JobMixFormula, AppError> {
        let mix = sqlx::query_as::<_, JobMixFormula>(&format!(
            "UPDATE job_mix_formulas SET \
                code = $2, description = $3, slump_mm = $4, semen_kg = $5, \
                pasir_kg = $6, batu_kg = $7, air_liter = $8, admixture_liter = $9 \
             WHERE id = $1 \
             RETURNING {JOB_MIX_COLUMNS}"
        ))
        .bind(id)
        .bind(code)
        .bind(description)
        .bind(slump_mm)
        .bind(semen_kg)
        .bind(pasir_kg)
        .bind(batu_kg)
        .bind(air_liter)
        .bind(admixture_liter)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_logistics_unique_violation)?;
        mix.ok_or(AppError::NotFound("Traço"))
    }

    pub async fn delete_job_mix(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_mix_formulas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Traço"));
        }
        Ok(())
    }

    // --- Locais ---

    pub async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, name, created_at FROM locations ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    pub async fn insert_location(&self, name: &str) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(
            "INSERT INTO locations (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_logistics_unique_violation)?;
        Ok(location)
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Local"));
        }
        Ok(())
    }
}

fn map_logistics_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint() {
                return AppError::UniqueConstraintViolation(constraint.to_string());
            }
        }
    }
    e.into()
}

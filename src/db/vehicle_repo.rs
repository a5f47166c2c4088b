// src/db/vehicle_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::vehicle::Vehicle};

const VEHICLE_COLUMNS: &str =
    "id, hull_number, license_plate, vehicle_type, operator_name, location, created_at";

#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vehicle)
    }

    // A chave de negócio é o número de casco
    pub async fn find_by_hull(&self, hull_number: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE hull_number = $1"
        ))
        .bind(hull_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vehicle)
    }

    // Listagem com os dois filtros de escopo: local e/ou placas do operador
    pub async fn list(
        &self,
        location: Option<&str>,
        plates: Option<&[String]>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles \
             WHERE ($1::text IS NULL OR location = $1) \
               AND ($2::text[] IS NULL OR license_plate = ANY($2)) \
             ORDER BY hull_number"
        ))
        .bind(location)
        .bind(plates)
        .fetch_all(&self.pool)
        .await?;
        Ok(vehicles)
    }

    // Resolve as placas do batangan para números de casco
    pub async fn hulls_for_plates(&self, plates: &[String]) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT hull_number FROM vehicles WHERE license_plate = ANY($1)",
        )
        .bind(plates)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(hull,)| hull).collect())
    }

    pub async fn create(
        &self,
        hull_number: &str,
        license_plate: &str,
        vehicle_type: &str,
        operator_name: &str,
        location: &str,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "INSERT INTO vehicles (hull_number, license_plate, vehicle_type, operator_name, location) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(hull_number)
        .bind(license_plate)
        .bind(vehicle_type)
        .bind(operator_name)
        .bind(location)
        .fetch_one(&self.pool)
        .await
        .map_err(map_vehicle_unique_violation)?;
        Ok(vehicle)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        hull_number: &str,
        license_plate: &str,
        vehicle_type: &str,
        operator_name: &str,
        location: &str,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "UPDATE vehicles SET \
                hull_number = $2, license_plate = $3, vehicle_type = $4, \
                operator_name = $5, location = $6 \
             WHERE id = $1 \
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(id)
        .bind(hull_number)
        .bind(license_plate)
        .bind(vehicle_type)
        .bind(operator_name)
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_vehicle_unique_violation)?;
        vehicle.ok_or(AppError::NotFound("Veículo"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Veículo"));
        }
        Ok(())
    }
}

fn map_vehicle_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("vehicles_hull_number_key") {
                return AppError::HullNumberAlreadyExists;
            }
        }
    }
    e.into()
}

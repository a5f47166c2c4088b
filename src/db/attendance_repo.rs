// src/db/attendance_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::attendance::{Attendance, AttendanceKind},
};

const ATTENDANCE_COLUMNS: &str =
    "id, user_id, user_name, kind, status, location, photo, \"timestamp\", attend_date";

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Registro do dia de um usuário para um tipo (entrada ou saída)
    pub async fn find_for_day(
        &self,
        user_id: Uuid,
        kind: AttendanceKind,
        attend_date: NaiveDate,
    ) -> Result<Option<Attendance>, AppError> {
        let attendance = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendances \
             WHERE user_id = $1 AND kind = $2 AND attend_date = $3"
        ))
        .bind(user_id)
        .bind(kind)
        .bind(attend_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(attendance)
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        user_name: &str,
        kind: AttendanceKind,
        status: &str,
        location: &str,
        photo: &str,
        attend_date: NaiveDate,
    ) -> Result<Attendance, AppError> {
        let attendance = sqlx::query_as::<_, Attendance>(&format!(
            "INSERT INTO attendances (user_id, user_name, kind, status, location, photo, attend_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ATTENDANCE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(user_name)
        .bind(kind)
        .bind(status)
        .bind(location)
        .bind(photo)
        .bind(attend_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("idx_attendances_user_kind_day")
                {
                    return AppError::DuplicateAttendance;
                }
            }
            e.into()
        })?;
        Ok(attendance)
    }

    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        location: Option<&str>,
        owner_id: Option<Uuid>,
    ) -> Result<Vec<Attendance>, AppError> {
        let attendances = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendances \
             WHERE ($1::date IS NULL OR attend_date >= $1) \
               AND ($2::date IS NULL OR attend_date <= $2) \
               AND ($3::text IS NULL OR location = $3) \
               AND ($4::uuid IS NULL OR user_id = $4) \
             ORDER BY \"timestamp\" DESC"
        ))
        .bind(from)
        .bind(to)
        .bind(location)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(attendances)
    }

    pub async fn count_for_day(
        &self,
        attend_date: NaiveDate,
        location: Option<&str>,
    ) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendances \
             WHERE attend_date = $1 AND ($2::text IS NULL OR location = $2)",
        )
        .bind(attend_date)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

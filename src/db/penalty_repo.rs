// src/db/penalty_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::penalty::{Penalty, PenaltySummary},
};

const PENALTY_COLUMNS: &str =
    "id, user_id, user_name, user_nik, vehicle_hull, points, reason, given_by_admin, \"timestamp\"";

// Ledger de penalidades: só INSERT e SELECT, nunca UPDATE
#[derive(Clone)]
pub struct PenaltyRepository {
    pool: PgPool,
}

impl PenaltyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        user_id: Uuid,
        user_name: &str,
        user_nik: Option<&str>,
        vehicle_hull: Option<&str>,
        points: i32,
        reason: &str,
        given_by_admin: &str,
    ) -> Result<Penalty, AppError> {
        let penalty = sqlx::query_as::<_, Penalty>(&format!(
            "INSERT INTO penalties (user_id, user_name, user_nik, vehicle_hull, points, reason, given_by_admin) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PENALTY_COLUMNS}"
        ))
        .bind(user_id)
        .bind(user_name)
        .bind(user_nik)
        .bind(vehicle_hull)
        .bind(points)
        .bind(reason)
        .bind(given_by_admin)
        .fetch_one(&self.pool)
        .await?;
        Ok(penalty)
    }

    // O local da penalidade é resolvido pelo usuário penalizado
    pub async fn list(
        &self,
        location: Option<&str>,
        owner_id: Option<Uuid>,
    ) -> Result<Vec<Penalty>, AppError> {
        let penalties = sqlx::query_as::<_, Penalty>(
            "SELECT p.id, p.user_id, p.user_name, p.user_nik, p.vehicle_hull, p.points, \
                    p.reason, p.given_by_admin, p.\"timestamp\" \
             FROM penalties p \
             LEFT JOIN users u ON u.id = p.user_id \
             WHERE ($1::text IS NULL OR u.location = $1) \
               AND ($2::uuid IS NULL OR p.user_id = $2) \
             ORDER BY p.\"timestamp\" DESC",
        )
        .bind(location)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(penalties)
    }

    // Total por usuário = soma pura do ledger, independente de ordem
    pub async fn summary(
        &self,
        location: Option<&str>,
        owner_id: Option<Uuid>,
    ) -> Result<Vec<PenaltySummary>, AppError> {
        let summary = sqlx::query_as::<_, PenaltySummary>(
            "SELECT p.user_id, p.user_name, SUM(p.points)::bigint AS total_points \
             FROM penalties p \
             LEFT JOIN users u ON u.id = p.user_id \
             WHERE ($1::text IS NULL OR u.location = $1) \
               AND ($2::uuid IS NULL OR p.user_id = $2) \
             GROUP BY p.user_id, p.user_name \
             ORDER BY total_points DESC",
        )
        .bind(location)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(summary)
    }
}

// src/services/penalty_service.rs

use crate::{
    common::error::AppError,
    db::{PenaltyRepository, UserRepository},
    domain::visibility::{scope_for, VisibilityScope},
    models::{
        auth::Actor,
        penalty::{CreatePenaltyPayload, Penalty, PenaltySummary},
    },
};

#[derive(Clone)]
pub struct PenaltyService {
    penalty_repo: PenaltyRepository,
    user_repo: UserRepository,
}

impl PenaltyService {
    pub fn new(penalty_repo: PenaltyRepository, user_repo: UserRepository) -> Self {
        Self {
            penalty_repo,
            user_repo,
        }
    }

    // Lançamento no ledger. O snapshot (nome, NIK) é congelado aqui de
    // propósito: a penalidade não muda se o cadastro mudar depois.
    pub async fn create(
        &self,
        admin: &Actor,
        payload: CreatePenaltyPayload,
    ) -> Result<Penalty, AppError> {
        let target = self
            .user_repo
            .find_by_id(payload.user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let given_by = admin
            .user()
            .username
            .clone()
            .unwrap_or_else(|| admin.name().to_string());

        self.penalty_repo
            .insert(
                target.id,
                &target.name,
                target.nik.as_deref(),
                payload.vehicle_hull.as_deref(),
                payload.points,
                &payload.reason,
                &given_by,
            )
            .await
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Penalty>, AppError> {
        let (location, owner_id) = Self::filters(actor);
        self.penalty_repo.list(location.as_deref(), owner_id).await
    }

    pub async fn summary(&self, actor: &Actor) -> Result<Vec<PenaltySummary>, AppError> {
        let (location, owner_id) = Self::filters(actor);
        self.penalty_repo
            .summary(location.as_deref(), owner_id)
            .await
    }

    fn filters(actor: &Actor) -> (Option<String>, Option<uuid::Uuid>) {
        match scope_for(actor) {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l), None),
            VisibilityScope::Own { user_id, .. } => (None, Some(user_id)),
        }
    }
}

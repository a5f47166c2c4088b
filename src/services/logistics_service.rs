// src/services/logistics_service.rs

use chrono::{Local, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{LogisticsRepository, VehicleRepository},
    domain::visibility::{scope_for, VisibilityScope},
    models::{
        auth::Actor,
        logistics::{
            CreateLocationPayload, CreateRitasiPayload, JobMixFormula, Location, RitasiLog,
            RitasiQuery, UpdateRitasiLegsPayload, UpsertJobMixPayload,
        },
    },
};

#[derive(Clone)]
pub struct LogisticsService {
    logistics_repo: LogisticsRepository,
    vehicle_repo: VehicleRepository,
}

impl LogisticsService {
    pub fn new(logistics_repo: LogisticsRepository, vehicle_repo: VehicleRepository) -> Self {
        Self {
            logistics_repo,
            vehicle_repo,
        }
    }

    // --- Ritasi ---

    // Abre o ciclo de viagem; a saída do BP é carimbada agora
    pub async fn open_ritasi(
        &self,
        actor: &Actor,
        payload: CreateRitasiPayload,
    ) -> Result<RitasiLog, AppError> {
        let vehicle = self
            .vehicle_repo
            .find_by_hull(&payload.vehicle_hull)
            .await?
            .ok_or(AppError::NotFound("Veículo"))?;

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

        let now = Utc::now();
        self.logistics_repo
            .insert_ritasi(
                &vehicle.hull_number,
                actor.name(),
                &vehicle.location,
                &payload.project_name,
                payload.volume_m3,
                now,
                Local::now().date_naive(),
            )
            .await
    }

    // Carimba as pernas seguintes (chegada na obra, retorno, chegada no BP)
    pub async fn stamp_ritasi_legs(
        &self,
        actor: &Actor,
        id: Uuid,
        payload: UpdateRitasiLegsPayload,
    ) -> Result<RitasiLog, AppError> {
        let log = self
            .logistics_repo
            .find_ritasi(id)
            .await?
            .ok_or(AppError::NotFound("Ritasi"))?;

        let scope = scope_for(actor);
        let visible = match &scope {
            VisibilityScope::All => true,
            VisibilityScope::Location(_) => scope.allows_location(&log.location),
            VisibilityScope::Own { .. } => scope.allows_owner(None, Some(&log.operator_name)),
        };
        if !visible {
            return Err(AppError::Forbidden(
                "Esta ritasi está fora do seu escopo.".to_string(),
            ));
        }

        self.logistics_repo
            .update_ritasi_legs(
                id,
                payload.arrival_time,
                payload.return_departure_time,
                payload.return_arrival_time,
            )
            .await
    }

    pub async fn list_ritasi(
        &self,
        actor: &Actor,
        query: &RitasiQuery,
    ) -> Result<Vec<RitasiLog>, AppError> {
        let scope = scope_for(actor);
        let (location, owner) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { name, .. } => (None, Some(name.as_str())),
        };
        self.logistics_repo
            .list_ritasi(query.from, query.to, location, owner)
            .await
    }

    // --- Traços (job mix) ---

    pub async fn list_job_mixes(&self) -> Result<Vec<JobMixFormula>, AppError> {
        self.logistics_repo.list_job_mixes().await
    }

    pub async fn create_job_mix(&self, payload: UpsertJobMixPayload) -> Result<JobMixFormula, AppError> {
        self.logistics_repo
            .insert_job_mix(
                &payload.code,
                &payload.description,
                payload.slump_mm,
                payload.semen_kg,
                payload.pasir_kg,
                payload.batu_kg,
                payload.air_liter,
                payload.admixture_liter,
            )
            .await
    }

    pub async fn update_job_mix(
        &self,
        id: Uuid,
        payload: UpsertJobMixPayload,
    ) -> Result<JobMixFormula, AppError> {
        self.logistics_repo
            .update_job_mix(
                id,
                &payload.code,
                &payload.description,
                payload.slump_mm,
                payload.semen_kg,
                payload.pasir_kg,
                payload.batu_kg,
                payload.air_liter,
                payload.admixture_liter,
            )
            .await
    }

    pub async fn delete_job_mix(&self, id: Uuid) -> Result<(), AppError> {
        self.logistics_repo.delete_job_mix(id).await
    }

    // --- Locais ---

    pub async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        self.logistics_repo.list_locations().await
    }

    pub async fn create_location(&self, payload: CreateLocationPayload) -> Result<Location, AppError> {
        self.logistics_repo.insert_location(&payload.name).await
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<(), AppError> {
        self.logistics_repo.delete_location(id).await
    }
}

// src/services/vehicle_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::VehicleRepository,
    domain::visibility::{scope_for, VisibilityScope},
    models::{
        auth::Actor,
        vehicle::{UpsertVehiclePayload, Vehicle},
    },
};

#[derive(Clone)]
pub struct VehicleService {
    vehicle_repo: VehicleRepository,
}

impl VehicleService {
    pub fn new(vehicle_repo: VehicleRepository) -> Self {
        Self { vehicle_repo }
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Vehicle>, AppError> {
        let scope = scope_for(actor);
        let (location, plates) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { plates, .. } => (None, Some(plates.as_slice())),
        };
        self.vehicle_repo.list(location, plates).await
    }

    pub async fn create(&self, payload: UpsertVehiclePayload) -> Result<Vehicle, AppError> {
        let vehicle = self
            .vehicle_repo
            .create(
                &payload.hull_number,
                &payload.license_plate,
                &payload.vehicle_type,
                &payload.operator_name,
                &payload.location,
            )
            .await?;
        tracing::info!("🚚 Veículo {} cadastrado", vehicle.hull_number);
        Ok(vehicle)
    }

    pub async fn update(&self, id: Uuid, payload: UpsertVehiclePayload) -> Result<Vehicle, AppError> {
        self.vehicle_repo
            .update(
                id,
                &payload.hull_number,
                &payload.license_plate,
                &payload.vehicle_type,
                &payload.operator_name,
                &payload.location,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.vehicle_repo.delete(id).await
    }
}

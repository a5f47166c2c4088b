// src/models/vehicle.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Veículo da frota - a chave de negócio é o número de casco (hull number),
// estável mesmo quando a placa muda.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    #[schema(example = "TM-014")]
    pub hull_number: String,
    #[schema(example = "BM 8712 QU")]
    pub license_plate: String,
    #[schema(example = "Truck Mixer")]
    pub vehicle_type: String,
    // Nome de exibição, não é chave estrangeira
    pub operator_name: String,
    #[schema(example = "BP Pekanbaru")]
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVehiclePayload {
    #[validate(length(min = 1, message = "O número de casco é obrigatório."))]
    pub hull_number: String,
    #[validate(length(min = 1, message = "A placa é obrigatória."))]
    pub license_plate: String,
    #[validate(length(min = 1, message = "O tipo do veículo é obrigatório."))]
    pub vehicle_type: String,
    #[serde(default)]
    pub operator_name: String,
    #[validate(length(min = 1, message = "A localização é obrigatória."))]
    pub location: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reservation::ReservationDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body returned when a requested range overlaps existing reservations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConflictErrorDto {
    pub error: String,
    pub conflicts: Vec<ReservationDto>,
}

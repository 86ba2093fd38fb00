use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::deserialize_present;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MeetingRoomDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMeetingRoomDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update; omitted fields are left unchanged.
///
/// `name` distinguishes an explicit `null` (rejected) from an omitted field.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateMeetingRoomDto {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

//! Request and response DTOs exchanged over the JSON API.

pub mod api;
pub mod meeting_room;
pub mod report;
pub mod reservation;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes a present field into `Some(value)`, keeping `null` distinct from absent.
///
/// Pair with `#[serde(default)]` so that an absent field becomes `None` while an
/// explicit `null` becomes `Some(None)`.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

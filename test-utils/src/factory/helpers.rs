//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, DurationRound, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns the start of the current hour shifted `hours` into the future.
///
/// Whole-hour instants keep boundary comparisons exact between what a test
/// builds and what SQLite stores.
pub fn hours_from_now(hours: i64) -> DateTime<Utc> {
    let now = Utc::now();
    let hour = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
    hour + Duration::hours(hours)
}

/// Creates a user, a meeting room, and a reservation owned by that user.
///
/// The reservation spans the hour starting one day from now.
///
/// # Returns
/// - `Ok((user, room, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::meeting_room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let room = crate::factory::meeting_room::create_meeting_room(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, room.id, user.id).await?;

    Ok((user, room, reservation))
}

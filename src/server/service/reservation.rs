//! Reservation business logic.
//!
//! Every write re-reads the room's overlapping reservations inside the same transaction
//! that performs the insert or update, so the conflict check and the write commit
//! together. Returning early drops the transaction, which rolls it back.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{meeting_room::MeetingRoomRepository, reservation::ReservationRepository},
    error::{auth::AuthError, reservation::ReservationError, AppError},
    middleware::auth::can_manage_reservation,
    model::{
        reservation::{CreateReservationParam, Reservation, UpdateReservationParam},
        user::User,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for the range in `param`.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The stored reservation
    /// - `Err(ReservationError::RoomNotFound)`: Room does not exist
    /// - `Err(ReservationError::Conflict)`: Range overlaps existing reservations
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        if MeetingRoomRepository::new(&txn)
            .find_by_id(param.meeting_room_id)
            .await?
            .is_none()
        {
            return Err(ReservationError::RoomNotFound(param.meeting_room_id).into());
        }

        let repo = ReservationRepository::new(&txn);

        let conflicts = repo
            .find_conflicts(param.meeting_room_id, &param.range, None)
            .await?;
        if !conflicts.is_empty() {
            return Err(ReservationError::Conflict(conflicts).into());
        }

        let reservation = repo.create(param).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} reserved room {} from {} to {}",
            reservation.user_id,
            reservation.meeting_room_id,
            reservation.from_reserve,
            reservation.to_reserve
        );

        Ok(reservation)
    }

    /// Moves a reservation to a new range on behalf of `actor`.
    ///
    /// The reservation itself is left out of the conflict check, so re-submitting its
    /// current range succeeds.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The updated reservation
    /// - `Err(ReservationError::ReservationNotFound)`: No reservation with that ID
    /// - `Err(AuthError::AccessDenied)`: Actor is neither owner nor superuser
    /// - `Err(ReservationError::Conflict)`: New range overlaps other reservations
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateReservationParam,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(ReservationError::ReservationNotFound(id).into());
        };

        if !can_manage_reservation(actor, &existing) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User attempted to update reservation {} owned by another user", id),
            )
            .into());
        }

        let conflicts = repo
            .find_conflicts(existing.meeting_room_id, &param.range, Some(id))
            .await?;
        if !conflicts.is_empty() {
            return Err(ReservationError::Conflict(conflicts).into());
        }

        let updated = repo.update_range(id, &param.range).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a reservation on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The reservation as it was before deletion
    /// - `Err(ReservationError::ReservationNotFound)`: No reservation with that ID
    /// - `Err(AuthError::AccessDenied)`: Actor is neither owner nor superuser
    pub async fn delete(&self, actor: &User, id: i32) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(ReservationError::ReservationNotFound(id).into());
        };

        if !can_manage_reservation(actor, &existing) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User attempted to delete reservation {} owned by another user", id),
            )
            .into());
        }

        repo.delete(id).await?;

        Ok(existing)
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }
}

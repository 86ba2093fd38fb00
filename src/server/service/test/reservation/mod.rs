use crate::server::{
    error::{auth::AuthError, reservation::ReservationError, AppError},
    model::{
        reservation::{CreateReservationParam, TimeRange, UpdateReservationParam},
        user::User,
    },
    service::reservation::ReservationService,
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory, factory::helpers::hours_from_now};

mod delete;
mod update;

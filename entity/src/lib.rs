//! SeaORM entity models for the meeting room booking schema.

pub mod prelude;

pub mod meeting_room;
pub mod reservation;
pub mod user;

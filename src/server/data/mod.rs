//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entity types out of the service layer. Every repository is
//! generic over `ConnectionTrait`, so it accepts either the pooled `DatabaseConnection`
//! or a `DatabaseTransaction`.

pub mod meeting_room;
pub mod reservation;
pub mod user;

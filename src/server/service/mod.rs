//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation rules that need the database (uniqueness, overlaps)
//! - **Authorization**: Ownership checks that depend on the loaded record
//! - **Transaction Management**: Running the overlap check and the write atomically
//! - **Orchestration**: Coordinating repositories and the spreadsheet collaborator

pub mod meeting_room;
pub mod report;
pub mod reservation;
pub mod user;

//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into domain parameters, call
//! the matching service and convert the result back into a DTO.

pub mod auth;
pub mod meeting_room;
pub mod report;
pub mod reservation;

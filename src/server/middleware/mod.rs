//! Request-scoped session access and permission checks.

pub mod auth;
pub mod session;

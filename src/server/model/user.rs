//! User domain models and parameters.

use crate::model::user::UserDto;

/// Authenticated principal with its capability flags.
///
/// The credential hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
            is_superuser: entity.is_superuser,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
        }
    }
}

/// Parameters for inserting a user whose credential is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub hashed_password: String,
    pub is_superuser: bool,
}

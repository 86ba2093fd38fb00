use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

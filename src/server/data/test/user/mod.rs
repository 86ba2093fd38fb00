use crate::server::{
    data::user::UserRepository, error::is_unique_violation, model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_credentials_by_email;

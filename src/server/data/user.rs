//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Stored credential
//! hashes are only handed out by `find_credentials_by_email`; every other method returns
//! the `User` domain model.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            hashed_password: ActiveValue::Set(param.hashed_password),
            is_active: ActiveValue::Set(true),
            is_superuser: ActiveValue::Set(param.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_credentials_by_email(email)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by email together with the stored credential hash.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let hash = entity.hashed_password.clone();
            (User::from_entity(entity), hash)
        }))
    }
}

//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder credential for users that never log in during a test.
pub const UNUSABLE_PASSWORD_HASH: &str = "!";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("someone@example.com")
///     .superuser(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    hashed_password: String,
    is_active: bool,
    is_superuser: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - hashed_password: [`UNUSABLE_PASSWORD_HASH`]
    /// - is_active: `true`
    /// - is_superuser: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            hashed_password: UNUSABLE_PASSWORD_HASH.to_string(),
            is_active: true,
            is_superuser: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored credential, which must already be a PHC hash string.
    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            hashed_password: ActiveValue::Set(self.hashed_password),
            is_active: ActiveValue::Set(self.is_active),
            is_superuser: ActiveValue::Set(self.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a superuser with default values.
pub async fn create_superuser(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).superuser(true).build().await
}

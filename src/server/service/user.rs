use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, is_unique_violation, AppError},
    model::user::{CreateUserParam, User},
    util::password::{hash_password, validate_email, validate_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user.
    ///
    /// # Returns
    /// - `Ok(User)`: The new, active, non-superuser account
    /// - `Err(AuthError::InvalidEmail)`: Email is malformed
    /// - `Err(AuthError::InvalidPassword)`: Password breaks the password rules
    /// - `Err(AuthError::DuplicateEmail)`: Email already registered
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        self.create(email, password, false).await
    }

    /// Checks login credentials.
    ///
    /// Unknown email, wrong password and inactive account all produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, hash)) = repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) || !user.is_active {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the configured first superuser unless that email is already registered.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: Superuser created
    /// - `Ok(None)`: A user with this email already exists; nothing changed
    pub async fn ensure_superuser(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(email).await?.is_some() {
            return Ok(None);
        }

        let user = self.create(email, password, true).await?;

        Ok(Some(user))
    }

    async fn create(&self, email: &str, password: &str, is_superuser: bool) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        validate_email(email)?;
        validate_password(password, email)?;

        if repo.find_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateEmail(email.to_string()).into());
        }

        let hashed_password = hash_password(password)?;

        let user = repo
            .create(CreateUserParam {
                email: email.to_string(),
                hashed_password,
                is_superuser,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AuthError::DuplicateEmail(email.to_string()).into()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }
}

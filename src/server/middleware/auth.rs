use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{reservation::Reservation, user::User},
};

pub enum Permission {
    Superuser,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every requested permission.
    ///
    /// Deactivated accounts are treated as not logged in.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - No (active) user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::UserNotInSession.into());
        }

        for permission in permissions {
            match permission {
                Permission::Superuser => {
                    if !user.is_superuser {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Operation requires superuser permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Whether `actor` may change or delete `reservation`: its owner or any superuser.
pub fn can_manage_reservation(actor: &User, reservation: &Reservation) -> bool {
    actor.is_superuser || reservation.user_id == actor.id
}

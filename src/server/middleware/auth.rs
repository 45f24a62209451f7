//! Session-based access control for API handlers.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{developer::DeveloperRole, guild::ActorDto},
    server::{
        data::{developer::DeveloperRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

pub enum Permission {
    /// Listed in the developer accounts table with any role.
    Developer,
    /// Listed with the `owner` role.
    Owner,
}

/// The logged in user together with their developer role.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub role: Option<DeveloperRole>,
}

impl CurrentUser {
    pub fn is_owner(&self) -> bool {
        self.role == Some(DeveloperRole::Owner)
    }

    /// Identity attached to commands forwarded to the bot API.
    pub fn actor(&self) -> ActorDto {
        ActorDto {
            username: self.user.shown_name().to_string(),
            user_id: self.user.discord_id.to_string(),
        }
    }
}

/// Per-request permission check used at the top of every protected handler.
///
/// Roles are read from the database on each call, so revoking access takes effect on
/// the next request without clearing sessions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    /// Creates a guard for one request.
    ///
    /// # Arguments
    /// - `db` - Database connection for user and developer lookups
    /// - `session` - Session extracted from the request
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every listed permission.
    ///
    /// An empty slice only requires a logged in user.
    ///
    /// # Arguments
    /// - `permissions` - Every permission the handler needs
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - User is logged in and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - Missing a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<CurrentUser, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let role = DeveloperRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
            .map(|account| account.role);

        for permission in permissions {
            match permission {
                Permission::Developer => {
                    if role.is_none() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "developer access required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Owner => {
                    if role != Some(DeveloperRole::Owner) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "owner access required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(CurrentUser { user, role })
    }
}

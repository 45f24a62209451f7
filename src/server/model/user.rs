//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{developer::DeveloperRole, user::UserDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// A Discord user who has logged in to the dashboard, with their profile settings.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub discord_id: u64,
    /// Discord username, refreshed on every login.
    pub name: String,
    pub display_name: Option<String>,
    /// Custom avatar as a JPEG data URL.
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user to a DTO, attaching their developer role if they have one.
    pub fn into_dto(self, role: Option<DeveloperRole>) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            display_name: self.display_name,
            avatar: self.avatar,
            role,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a `u64`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            display_name: entity.display_name,
            avatar: entity.avatar,
            created_at: entity.created_at,
        })
    }

    /// The name other dashboard users and the bot see for this user.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Parameters for upserting a user after a successful Discord login.
///
/// Only the Discord username is refreshed on conflict, so profile settings survive
/// re-login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
}

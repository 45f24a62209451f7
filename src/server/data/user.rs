//! User data repository for database operations.
//!
//! Users are created on first login and keep their profile settings (display name,
//! avatar) across logins.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository for dashboard users.
///
/// Discord IDs are stored as strings and parsed back into `u64` when converting to the
/// domain [`User`].
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a repository over the given connection.
    ///
    /// # Arguments
    /// - `db` - Pooled database connection from `AppState`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user or refreshes an existing user's Discord username.
    ///
    /// Display name and avatar are left untouched on conflict.
    ///
    /// # Arguments
    /// - `param` - Discord ID and username from the OAuth callback
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            display_name: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_column(entity::user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - The user never logged in
    /// - `Err(AppError)` - Database error
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Sets or clears (`None`) the user's display name.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user
    /// - `display_name` - Already normalized name, or `None` to fall back to the
    ///   Discord name
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_display_name(
        &self,
        discord_id: u64,
        display_name: Option<String>,
    ) -> Result<Option<User>, AppError> {
        self.update_column(
            discord_id,
            entity::user::Column::DisplayName,
            display_name,
        )
        .await
    }

    /// Sets or clears (`None`) the user's avatar data URL.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user
    /// - `avatar` - Verified JPEG data URL, or `None` to use the Discord avatar
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_avatar(
        &self,
        discord_id: u64,
        avatar: Option<String>,
    ) -> Result<Option<User>, AppError> {
        self.update_column(discord_id, entity::user::Column::Avatar, avatar)
            .await
    }

    async fn update_column(
        &self,
        discord_id: u64,
        column: entity::user::Column,
        value: Option<String>,
    ) -> Result<Option<User>, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(column, sea_orm::sea_query::Expr::value(value))
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_discord_id(discord_id).await
    }
}

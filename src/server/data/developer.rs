//! Developer account repository.
//!
//! Stores who may use the developer console and who may manage that list. Roles are
//! persisted as the lowercase strings `owner` and `developer`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::developer::DeveloperRole,
    server::{
        error::AppError,
        model::developer::{CreateDeveloperParam, DeveloperAccount},
    },
};

/// Repository for the developer access list.
pub struct DeveloperRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeveloperRepository<'a> {
    /// Creates a repository over the given connection.
    ///
    /// # Arguments
    /// - `db` - Pooled database connection from `AppState`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all developer accounts, owners first, then by name.
    ///
    /// # Returns
    /// - `Ok(Vec<DeveloperAccount>)` - Every entry in the access list
    /// - `Err(AppError)` - Database error or unparsable stored ID/role
    pub async fn get_all(&self) -> Result<Vec<DeveloperAccount>, AppError> {
        // "owner" sorts after "developer"
        let entities = entity::prelude::DeveloperAccount::find()
            .order_by_desc(entity::developer_account::Column::Role)
            .order_by_asc(entity::developer_account::Column::Name)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(DeveloperAccount::from_entity)
            .collect()
    }

    /// Finds the access entry for a Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID to look up
    ///
    /// # Returns
    /// - `Ok(Some(DeveloperAccount))` - The user is a developer or owner
    /// - `Ok(None)` - The user has no console access
    /// - `Err(AppError)` - Database error
    pub async fn find_by_discord_id(
        &self,
        discord_id: u64,
    ) -> Result<Option<DeveloperAccount>, AppError> {
        entity::prelude::DeveloperAccount::find()
            .filter(entity::developer_account::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?
            .map(DeveloperAccount::from_entity)
            .transpose()
    }

    /// Inserts a developer account, or updates name and role when the Discord ID already
    /// has one.
    ///
    /// The original `added_by` is kept on conflict.
    ///
    /// # Arguments
    /// - `param` - Discord ID, name, role, and granting owner
    ///
    /// # Returns
    /// - `Ok(DeveloperAccount)` - The stored entry
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, param: CreateDeveloperParam) -> Result<DeveloperAccount, AppError> {
        let entity = entity::prelude::DeveloperAccount::insert(
            entity::developer_account::ActiveModel {
                discord_id: ActiveValue::Set(param.discord_id.to_string()),
                name: ActiveValue::Set(param.name),
                role: ActiveValue::Set(param.role.as_str().to_string()),
                added_by: ActiveValue::Set(param.added_by.map(|id| id.to_string())),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::developer_account::Column::DiscordId)
                .update_columns([
                    entity::developer_account::Column::Name,
                    entity::developer_account::Column::Role,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DeveloperAccount::from_entity(entity)
    }

    /// Deletes the account for a Discord ID.
    ///
    /// Does not check the role; callers refuse to remove owners before calling this.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID whose access is revoked
    ///
    /// # Returns
    /// - `Ok(true)` - An account was deleted
    /// - `Ok(false)` - No account existed
    pub async fn delete(&self, discord_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::DeveloperAccount::delete_many()
            .filter(entity::developer_account::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Whether at least one owner exists. Used at startup to decide whether a bootstrap
    /// code is needed.
    pub async fn owner_exists(&self) -> Result<bool, AppError> {
        let count = entity::prelude::DeveloperAccount::find()
            .filter(entity::developer_account::Column::Role.eq(DeveloperRole::Owner.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

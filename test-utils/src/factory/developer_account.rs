//! Developer account factory for creating test access-list entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating developer accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::developer_account::DeveloperAccountFactory;
///
/// let owner = DeveloperAccountFactory::new(&db)
///     .discord_id("123456789")
///     .role("owner")
///     .build()
///     .await?;
/// ```
pub struct DeveloperAccountFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    role: String,
    added_by: Option<String>,
}

impl<'a> DeveloperAccountFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented counter value
    /// - name: `"Developer {id}"`
    /// - role: `"developer"`
    /// - added_by: `None`
    ///
    /// # Arguments
    /// - `db` - Connection the account is inserted into by [`Self::build`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Developer {}", id),
            role: "developer".to_string(),
            added_by: None,
        }
    }

    /// Sets the Discord ID the access entry belongs to.
    ///
    /// # Arguments
    /// - `discord_id` - Discord snowflake as a string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the name shown in the access list.
    ///
    /// # Arguments
    /// - `name` - Label entered by the owner
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored role string (`owner` or `developer`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Records which owner granted access.
    ///
    /// # Arguments
    /// - `added_by` - Discord ID of the granting owner
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn added_by(mut self, added_by: impl Into<String>) -> Self {
        self.added_by = Some(added_by.into());
        self
    }

    /// Builds and inserts the developer account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::developer_account::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::developer_account::Model, DbErr> {
        entity::developer_account::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            added_by: ActiveValue::Set(self.added_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner account for the given Discord ID.
///
/// # Returns
/// - `Ok(entity::developer_account::Model)` - Inserted owner row
/// - `Err(DbErr)` - Insert failed, for example a duplicate Discord ID
pub async fn create_owner(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::developer_account::Model, DbErr> {
    DeveloperAccountFactory::new(db)
        .discord_id(discord_id)
        .role("owner")
        .build()
        .await
}

/// Creates a developer account for the given Discord ID.
pub async fn create_developer(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::developer_account::Model, DbErr> {
    DeveloperAccountFactory::new(db)
        .discord_id(discord_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_developer_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DeveloperAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let account = DeveloperAccountFactory::new(db).build().await?;

        assert_eq!(account.role, "developer");
        assert!(account.added_by.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_owner() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DeveloperAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = create_owner(db, "42").await?;

        assert_eq!(owner.discord_id, "42");
        assert_eq!(owner.role, "owner");

        Ok(())
    }
}

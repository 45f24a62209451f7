//! Developer access management.
//!
//! Owners grant and revoke developer access. Owner accounts themselves can only be
//! created through the bootstrap code and are never removed from the dashboard.

use sea_orm::DatabaseConnection;

use crate::{
    model::developer::DeveloperRole,
    server::{
        data::developer::DeveloperRepository,
        error::AppError,
        model::developer::{CreateDeveloperParam, DeveloperAccount},
    },
};

/// Access list rules on top of [`DeveloperRepository`].
pub struct DeveloperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeveloperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DeveloperAccount>, AppError> {
        DeveloperRepository::new(self.db).get_all().await
    }

    /// Grants developer access.
    ///
    /// # Arguments
    /// - `discord_id` - User receiving access
    /// - `name` - Label for the access list, trimmed
    /// - `added_by` - Owner granting access
    ///
    /// # Returns
    /// - `Ok(DeveloperAccount)` - The new account
    /// - `Err(AppError::BadRequest)` - Empty name, or the user already has access
    pub async fn add_developer(
        &self,
        discord_id: u64,
        name: String,
        added_by: u64,
    ) -> Result<DeveloperAccount, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let repo = DeveloperRepository::new(self.db);
        if let Some(existing) = repo.find_by_discord_id(discord_id).await? {
            return Err(AppError::BadRequest(format!(
                "{} already has {} access",
                existing.name,
                existing.role.as_str()
            )));
        }

        repo.upsert(CreateDeveloperParam {
            discord_id,
            name,
            role: DeveloperRole::Developer,
            added_by: Some(added_by),
        })
        .await
    }

    /// Revokes developer access.
    ///
    /// # Arguments
    /// - `discord_id` - User losing access
    ///
    /// # Returns
    /// - `Ok(())` - Access revoked
    /// - `Err(AppError::NotFound)` - No account for that Discord ID
    /// - `Err(AppError::BadRequest)` - The account is an owner
    pub async fn remove_developer(&self, discord_id: u64) -> Result<(), AppError> {
        let repo = DeveloperRepository::new(self.db);

        let Some(account) = repo.find_by_discord_id(discord_id).await? else {
            return Err(AppError::NotFound("Developer account not found".to_string()));
        };

        if account.role == DeveloperRole::Owner {
            return Err(AppError::BadRequest(
                "Owner accounts cannot be removed".to_string(),
            ));
        }

        repo.delete(discord_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn adds_developer() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let account = DeveloperService::new(db)
            .add_developer(500, "  carol ".to_string(), 1)
            .await?;

        assert_eq!(account.name, "carol");
        assert_eq!(account.role, DeveloperRole::Developer);
        assert_eq!(account.added_by, Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_and_blank() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        factory::create_owner(db, "1").await?;
        let service = DeveloperService::new(db);

        assert!(matches!(
            service.add_developer(1, "owner".to_string(), 1).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.add_developer(2, "   ".to_string(), 1).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn owners_cannot_be_removed() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        factory::create_owner(db, "1").await?;
        factory::create_developer(db, "2").await?;
        let service = DeveloperService::new(db);

        assert!(matches!(
            service.remove_developer(1).await,
            Err(AppError::BadRequest(_))
        ));
        service.remove_developer(2).await?;
        assert!(matches!(
            service.remove_developer(2).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}

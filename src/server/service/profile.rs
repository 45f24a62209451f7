//! Display name and avatar settings.

use sea_orm::DatabaseConnection;

use crate::{
    avatar::{verify_avatar, CompressOptions},
    model::profile::normalize_display_name,
    server::{data::user::UserRepository, error::AppError, model::user::User},
};

/// Profile edits for the logged in user.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the display name, or clears it when the input is blank.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Name too long or contains control characters
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_display_name(
        &self,
        discord_id: u64,
        input: &str,
    ) -> Result<User, AppError> {
        let display_name = normalize_display_name(input).map_err(AppError::BadRequest)?;

        UserRepository::new(self.db)
            .update_display_name(discord_id, display_name)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Verifies and stores an avatar produced by the avatar editor.
    ///
    /// The data URL must decode to a 256×256 JPEG within the byte budget, so a client
    /// cannot bypass the editor to store arbitrary images.
    ///
    /// # Arguments
    /// - `discord_id` - The logged in user
    /// - `data_url` - `data:image/jpeg;base64,...` from the editor
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::AvatarErr(_))` - Not a JPEG data URL, wrong size, or over budget
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_avatar(&self, discord_id: u64, data_url: String) -> Result<User, AppError> {
        verify_avatar(&data_url, &CompressOptions::default())?;

        UserRepository::new(self.db)
            .update_avatar(discord_id, Some(data_url))
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Removes the custom avatar so the Discord avatar is shown again.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn clear_avatar(&self, discord_id: u64) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_avatar(discord_id, None)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{compress_avatar, SourceRect};
    use image::{DynamicImage, Rgb, RgbImage};
    use test_utils::{builder::TestBuilder, factory};

    fn valid_avatar() -> String {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([30, 120, 200])));
        let rect = SourceRect {
            x: 0,
            y: 0,
            width: 300,
            height: 300,
        };
        compress_avatar(&image, rect, &CompressOptions::default())
            .unwrap()
            .to_data_url()
    }

    #[tokio::test]
    async fn stores_verified_avatar() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();
        factory::user::create_user_with_id(db, "9").await?;

        let avatar = valid_avatar();
        let user = ProfileService::new(db).update_avatar(9, avatar.clone()).await?;

        assert_eq!(user.avatar, Some(avatar));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unverified_avatar() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();
        factory::user::create_user_with_id(db, "9").await?;

        let result = ProfileService::new(db)
            .update_avatar(9, "data:image/png;base64,AAAA".to_string())
            .await;

        assert!(matches!(result, Err(AppError::AvatarErr(_))));

        Ok(())
    }

    #[tokio::test]
    async fn validates_display_name() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.database().await.unwrap();
        factory::user::create_user_with_id(db, "9").await?;
        let service = ProfileService::new(db);

        let user = service.update_display_name(9, "  Beat Maker ").await?;
        assert_eq!(user.display_name.as_deref(), Some("Beat Maker"));

        let too_long = "x".repeat(100);
        assert!(matches!(
            service.update_display_name(9, &too_long).await,
            Err(AppError::BadRequest(_))
        ));

        let user = service.update_display_name(9, "").await?;
        assert!(user.display_name.is_none());

        Ok(())
    }
}

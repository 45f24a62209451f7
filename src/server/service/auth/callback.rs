use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serenity::all::User as DiscordUser;

use crate::{
    model::developer::DeveloperRole,
    server::{
        data::{developer::DeveloperRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{developer::CreateDeveloperParam, user::{UpsertUserParam, User}},
        service::auth::DiscordAuthService,
    },
};

impl<'a> DiscordAuthService<'a> {
    /// Exchanges the authorization code, fetches the Discord user and upserts them.
    ///
    /// When `set_owner` is true (a valid bootstrap code was presented at login) the user
    /// is also recorded as an owner.
    pub async fn callback(
        &self,
        authorization_code: String,
        set_owner: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let discord_id = discord_user.id.get();

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id,
                name: discord_user.name.clone(),
            })
            .await?;

        if set_owner {
            DeveloperRepository::new(self.db)
                .upsert(CreateDeveloperParam {
                    discord_id,
                    name: discord_user.name,
                    role: DeveloperRole::Owner,
                    added_by: None,
                })
                .await?;
            tracing::info!("User {} claimed the owner bootstrap code", discord_id);
        }

        Ok(user)
    }

    /// Retrieves the Discord user using the provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(self.user_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}

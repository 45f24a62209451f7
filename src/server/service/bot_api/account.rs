use reqwest::Method;

use crate::{
    model::account::{AuthUserDto, MfaMethodDto, SecurityLogEntryDto, UpdateAccountStatusDto},
    server::{error::bot_api::BotApiError, service::bot_api::BotApiClient},
};

impl BotApiClient {
    pub async fn get_accounts(&self) -> Result<Vec<AuthUserDto>, BotApiError> {
        self.get("/api/accounts").await
    }

    pub async fn get_mfa_methods(&self, account_id: &str) -> Result<Vec<MfaMethodDto>, BotApiError> {
        self.get(&format!("/api/accounts/{}/mfa", account_id)).await
    }

    pub async fn get_security_log(
        &self,
        account_id: &str,
    ) -> Result<Vec<SecurityLogEntryDto>, BotApiError> {
        self.get(&format!("/api/accounts/{}/security-log", account_id))
            .await
    }

    /// Activates, suspends, or bans an auth account.
    ///
    /// # Arguments
    /// - `account_id` - Bot API account ID
    /// - `update` - New status and reason, already validated
    ///
    /// # Returns
    /// - `Ok(AuthUserDto)` - The account after the change
    /// - `Err(BotApiError::Status)` - Unknown account or rejected change
    pub async fn update_account_status(
        &self,
        account_id: &str,
        update: &UpdateAccountStatusDto,
    ) -> Result<AuthUserDto, BotApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/accounts/{}/status", account_id),
            update,
        )
        .await
    }
}

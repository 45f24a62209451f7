use reqwest::Method;

use crate::{
    model::{
        admin::{BotCommand, BotStatusDto, ChangelogEntryDto, CreateChangelogEntryDto, MaintenanceDto},
        guild::ActorDto,
    },
    server::{error::bot_api::BotApiError, service::bot_api::BotApiClient},
};

impl BotApiClient {
    pub async fn get_status(&self) -> Result<BotStatusDto, BotApiError> {
        self.get("/api/admin/status").await
    }

    /// Sends a process command. Owner checks for shutdown and restart happen in the
    /// controller before this is called.
    ///
    /// # Arguments
    /// - `command` - Shutdown, restart, pause, or resume
    /// - `actor` - Developer issuing the command, for the bot's audit log
    pub async fn send_bot_command(
        &self,
        command: BotCommand,
        actor: &ActorDto,
    ) -> Result<(), BotApiError> {
        self.send_command(
            Method::POST,
            &format!("/api/admin/{}", command.as_str()),
            actor,
        )
        .await
    }

    /// Turns maintenance mode on or off.
    ///
    /// # Returns
    /// - `Ok(MaintenanceDto)` - Maintenance state as stored by the bot
    pub async fn set_maintenance(
        &self,
        maintenance: &MaintenanceDto,
    ) -> Result<MaintenanceDto, BotApiError> {
        self.send_json(Method::PUT, "/api/admin/maintenance", maintenance)
            .await
    }

    pub async fn get_changelog(&self) -> Result<Vec<ChangelogEntryDto>, BotApiError> {
        self.get("/api/admin/changelog").await
    }

    pub async fn create_changelog_entry(
        &self,
        entry: &CreateChangelogEntryDto,
    ) -> Result<ChangelogEntryDto, BotApiError> {
        self.send_json(Method::POST, "/api/admin/changelog", entry)
            .await
    }

    pub async fn delete_changelog_entry(&self, id: &str) -> Result<(), BotApiError> {
        self.delete(&format!("/api/admin/changelog/{}", id)).await
    }
}

use reqwest::Method;

use crate::{
    model::guild::{ActorDto, GuildDto, MoveQueueRequestDto, PlaybackAction},
    server::{error::bot_api::BotApiError, service::bot_api::BotApiClient},
};

impl BotApiClient {
    /// Fetches the guild header, now playing track, and queue.
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - Current guild state
    /// - `Err(BotApiError::Status)` - 404 when the bot is not in the guild
    pub async fn get_guild(&self, guild_id: u64) -> Result<GuildDto, BotApiError> {
        self.get(&format!("/api/guild/{}", guild_id)).await
    }

    /// Pause, resume, skip, or stop playback. The bot checks that the actor is in the
    /// voice channel.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to control
    /// - `action` - Playback action
    /// - `actor` - Logged in user, taken from the session
    ///
    /// # Returns
    /// - `Ok(())` - The bot accepted the command
    /// - `Err(BotApiError::Status)` - Rejected; `voice_required` is set when the actor is
    ///   not in the bot's voice channel
    pub async fn control(
        &self,
        guild_id: u64,
        action: PlaybackAction,
        actor: &ActorDto,
    ) -> Result<(), BotApiError> {
        self.send_command(
            Method::POST,
            &format!("/api/control/{}/{}", guild_id, action.as_str()),
            actor,
        )
        .await
    }

    /// Removes the entry at a 1-based queue position.
    pub async fn remove_from_queue(
        &self,
        guild_id: u64,
        position: u32,
        actor: &ActorDto,
    ) -> Result<(), BotApiError> {
        self.send_command(
            Method::POST,
            &format!("/api/queue/{}/remove/{}", guild_id, position),
            actor,
        )
        .await
    }

    pub async fn move_in_queue(
        &self,
        guild_id: u64,
        request: &MoveQueueRequestDto,
    ) -> Result<(), BotApiError> {
        self.send_command(
            Method::POST,
            &format!("/api/queue/{}/move", guild_id),
            request,
        )
        .await
    }
}

//! Ticket status changes.
//!
//! The bot API stores tickets; the dashboard enforces the lifecycle before forwarding
//! so an invalid move never reaches the bot.

use crate::{
    model::ticket::{TicketCode, TicketDto, TicketStatus},
    server::{error::AppError, service::bot_api::BotApiClient},
};

pub struct TicketService<'a> {
    bot_api: &'a BotApiClient,
}

impl<'a> TicketService<'a> {
    pub fn new(bot_api: &'a BotApiClient) -> Self {
        Self { bot_api }
    }

    /// Moves a ticket to `next` if its current status allows it.
    ///
    /// # Arguments
    /// - `code` - Validated ticket code
    /// - `next` - Requested status
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - The ticket as returned by the bot after the update
    /// - `Err(AppError::BadRequest)` - The transition is not part of the lifecycle; no
    ///   update is sent
    /// - `Err(AppError::BotApiErr)` - Fetching or updating the ticket failed upstream
    pub async fn change_status(
        &self,
        code: &TicketCode,
        next: TicketStatus,
    ) -> Result<TicketDto, AppError> {
        let current = self.bot_api.get_ticket(code).await?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "Cannot change a {} ticket to {}",
                current.status.label().to_lowercase(),
                next.label().to_lowercase()
            )));
        }

        Ok(self.bot_api.update_ticket_status(code, next).await?)
    }
}

use reqwest::Method;

use crate::{
    model::ticket::{
        TicketCode, TicketDto, TicketReplyRequestDto, TicketStatus, TicketSummaryDto,
        UpdateTicketStatusDto,
    },
    server::{error::bot_api::BotApiError, service::bot_api::BotApiClient},
};

impl BotApiClient {
    /// Lists tickets, optionally filtered by status.
    pub async fn get_tickets(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<TicketSummaryDto>, BotApiError> {
        match status {
            Some(status) => self.get(&format!("/api/tickets?status={}", status)).await,
            None => self.get("/api/tickets").await,
        }
    }

    pub async fn get_ticket(&self, code: &TicketCode) -> Result<TicketDto, BotApiError> {
        self.get(&format!("/api/tickets/{}", code)).await
    }

    pub async fn update_ticket_status(
        &self,
        code: &TicketCode,
        status: TicketStatus,
    ) -> Result<TicketDto, BotApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/tickets/{}/status", code),
            &UpdateTicketStatusDto { status },
        )
        .await
    }

    pub async fn post_ticket_message(
        &self,
        code: &TicketCode,
        reply: &TicketReplyRequestDto,
    ) -> Result<TicketDto, BotApiError> {
        self.send_json(
            Method::POST,
            &format!("/api/tickets/{}/messages", code),
            reply,
        )
        .await
    }
}

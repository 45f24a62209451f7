use crate::{
    client::{
        api::helper::{get, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::ticket::{
        PostTicketMessageDto, TicketCode, TicketDto, TicketStatus, TicketSummaryDto,
        UpdateTicketStatusDto,
    },
};

/// Lists tickets, optionally filtered to one status.
pub async fn get_tickets(status: Option<TicketStatus>) -> Result<Vec<TicketSummaryDto>, ApiError> {
    let url = match status {
        Some(status) => format!("/api/tickets?status={}", status.as_str()),
        None => "/api/tickets".to_string(),
    };
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_ticket(code: &TicketCode) -> Result<TicketDto, ApiError> {
    let url = format!("/api/tickets/{}", code.as_str());
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_ticket_status(
    code: &TicketCode,
    status: TicketStatus,
) -> Result<TicketDto, ApiError> {
    let url = format!("/api/tickets/{}/status", code.as_str());
    let body = serialize_json(&UpdateTicketStatusDto { status })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn post_ticket_message(code: &TicketCode, content: String) -> Result<TicketDto, ApiError> {
    let url = format!("/api/tickets/{}/messages", code.as_str());
    let body = serialize_json(&PostTicketMessageDto { content })?;
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

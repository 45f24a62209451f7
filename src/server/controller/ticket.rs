use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        ticket::{
            PostTicketMessageDto, TicketCode, TicketDto, TicketReplyRequestDto, TicketStatus,
            TicketSummaryDto, UpdateTicketStatusDto, MAX_TICKET_MESSAGE_LEN,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

#[derive(Deserialize)]
pub struct TicketListParams {
    pub status: Option<String>,
}

fn parse_code(code: &str) -> Result<TicketCode, AppError> {
    TicketCode::parse(code).map_err(AppError::BadRequest)
}

/// List support tickets, optionally filtered by status.
///
/// # Access Control
/// - `Developer` - Tickets are only visible on the developer dashboard
///
/// # Arguments
/// - `status` - Optional filter: `pending`, `in_progress`, `resolved`, or `closed`
///
/// # Returns
/// - `200 OK` - Ticket summaries
/// - `400 Bad Request` - Unknown status value
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(("status" = Option<String>, Query, description = "pending, in_progress, resolved or closed")),
    responses(
        (status = 200, description = "Tickets", body = Vec<TicketSummaryDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TicketListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let status = params
        .status
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<TicketStatus>())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let tickets = state.bot_api.get_tickets(status).await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Get a ticket with its message thread.
#[utoipa::path(
    get,
    path = "/api/tickets/{code}",
    tag = TICKET_TAG,
    params(("code" = String, Path, description = "Ticket code, SONORA-XXXX-XXXX")),
    responses(
        (status = 200, description = "Ticket", body = TicketDto),
        (status = 400, description = "Malformed ticket code", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let code = parse_code(&code)?;
    let ticket = state.bot_api.get_ticket(&code).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Move a ticket along its lifecycle.
///
/// The current status is fetched first and transitions outside
/// `pending -> in_progress -> resolved | closed` (plus reopening) are rejected without
/// contacting the bot's update endpoint.
///
/// # Access Control
/// - `Developer` - Any developer can change ticket status
///
/// # Arguments
/// - `code` - Ticket code, `SONORA-XXXX-XXXX`
/// - `payload` - Requested status
///
/// # Returns
/// - `200 OK` - Ticket after the update
/// - `400 Bad Request` - Malformed code or a transition the lifecycle does not allow
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    put,
    path = "/api/tickets/{code}/status",
    tag = TICKET_TAG,
    params(("code" = String, Path, description = "Ticket code, SONORA-XXXX-XXXX")),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Updated ticket", body = TicketDto),
        (status = 400, description = "Malformed code or invalid transition", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Json(payload): Json<UpdateTicketStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let code = parse_code(&code)?;
    let ticket = TicketService::new(&state.bot_api)
        .change_status(&code, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Reply to a ticket as staff. The author is the logged in user.
#[utoipa::path(
    post,
    path = "/api/tickets/{code}/messages",
    tag = TICKET_TAG,
    params(("code" = String, Path, description = "Ticket code, SONORA-XXXX-XXXX")),
    request_body = PostTicketMessageDto,
    responses(
        (status = 200, description = "Updated ticket", body = TicketDto),
        (status = 400, description = "Malformed code or empty message", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn post_ticket_message(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Json(payload): Json<PostTicketMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let code = parse_code(&code)?;

    let content = payload.content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }
    if content.chars().count() > MAX_TICKET_MESSAGE_LEN {
        return Err(AppError::BadRequest(format!(
            "Message must be at most {} characters",
            MAX_TICKET_MESSAGE_LEN
        )));
    }

    let actor = current.actor();
    let reply = TicketReplyRequestDto {
        content: content.to_string(),
        author: actor.username,
        author_id: actor.user_id,
        staff: true,
    };
    let ticket = state.bot_api.post_ticket_message(&code, &reply).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        admin::{
            BotCommand, BotStatusDto, ChangelogEntryDto, CreateChangelogEntryDto, MaintenanceDto,
            MAX_MAINTENANCE_MESSAGE_LEN,
        },
        api::ErrorDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the bot process status shown on the developer console.
///
/// # Access Control
/// - `Developer` - Only developers can view bot status
///
/// # Returns
/// - `200 OK` - Uptime, guild count, pause and maintenance state
/// - `403 Forbidden` - Caller is not a developer
/// - `502 Bad Gateway` - Bot API unreachable
#[utoipa::path(
    get,
    path = "/api/admin/status",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Bot process status", body = BotStatusDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let status = state.bot_api.get_status().await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Shutdown, restart, or globally pause/resume the bot.
///
/// Shutdown and restart are owner only.
///
/// # Access Control
/// - `Developer` - Pause and resume
/// - `Owner` - Shutdown and restart
///
/// # Arguments
/// - `command` - One of `shutdown`, `restart`, `pause`, `resume`
///
/// # Returns
/// - `204 No Content` - The bot accepted the command
/// - `400 Bad Request` - Unknown command
/// - `403 Forbidden` - Missing the role the command needs
#[utoipa::path(
    post,
    path = "/api/admin/{command}",
    tag = ADMIN_TAG,
    params(("command" = String, Path, description = "shutdown, restart, pause or resume")),
    responses(
        (status = 204, description = "Command sent"),
        (status = 400, description = "Unknown command", body = ErrorDto),
        (status = 403, description = "Developer or owner access required", body = ErrorDto),
    ),
)]
pub async fn send_command(
    State(state): State<AppState>,
    session: Session,
    Path(command): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let command = command.parse::<BotCommand>().map_err(AppError::BadRequest)?;

    if command.requires_owner() && !current.is_owner() {
        return Err(AuthError::AccessDenied(
            current.user.discord_id,
            format!("{} requires owner access", command),
        )
        .into());
    }

    tracing::info!(
        "User {} sent bot command {}",
        current.user.discord_id,
        command
    );
    state
        .bot_api
        .send_bot_command(command, &current.actor())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Turn maintenance mode on or off with an optional message for users.
///
/// # Arguments
/// - `payload` - Enabled flag and message, at most 500 characters
///
/// # Returns
/// - `200 OK` - Maintenance state as stored by the bot
/// - `400 Bad Request` - Message too long
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    put,
    path = "/api/admin/maintenance",
    tag = ADMIN_TAG,
    request_body = MaintenanceDto,
    responses(
        (status = 200, description = "Maintenance mode updated", body = MaintenanceDto),
        (status = 400, description = "Message too long", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn set_maintenance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let message = payload
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    if message
        .as_ref()
        .is_some_and(|m| m.chars().count() > MAX_MAINTENANCE_MESSAGE_LEN)
    {
        return Err(AppError::BadRequest(format!(
            "Maintenance message must be at most {} characters",
            MAX_MAINTENANCE_MESSAGE_LEN
        )));
    }

    let maintenance = state
        .bot_api
        .set_maintenance(&MaintenanceDto {
            enabled: payload.enabled,
            message,
        })
        .await?;

    Ok((StatusCode::OK, Json(maintenance)))
}

/// List changelog entries, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/changelog",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Changelog entries, newest first", body = Vec<ChangelogEntryDto>),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_changelog(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let mut entries = state.bot_api.get_changelog().await?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok((StatusCode::OK, Json(entries)))
}

/// Publish a changelog entry.
///
/// # Access Control
/// - `Developer` - Any developer can publish
///
/// # Arguments
/// - `payload` - Version, title, and Markdown body; all required
///
/// # Returns
/// - `201 Created` - The stored entry
/// - `400 Bad Request` - A field is empty
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    post,
    path = "/api/admin/changelog",
    tag = ADMIN_TAG,
    request_body = CreateChangelogEntryDto,
    responses(
        (status = 201, description = "Entry created", body = ChangelogEntryDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn create_changelog_entry(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChangelogEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    payload.validate().map_err(AppError::BadRequest)?;

    let entry = state.bot_api.create_changelog_entry(&payload).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete a changelog entry by its bot API ID.
#[utoipa::path(
    delete,
    path = "/api/admin/changelog/{id}",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Changelog entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn delete_changelog_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::BadRequest("Invalid changelog entry ID".to_string()));
    }

    state.bot_api.delete_changelog_entry(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

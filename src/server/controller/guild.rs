use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, MoveQueueDto, MoveQueueRequestDto, PlaybackAction},
    },
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get a guild's now-playing state and queue from the bot.
#[utoipa::path(
    get,
    path = "/api/guild/{guild_id}",
    tag = GUILD_TAG,
    params(("guild_id" = u64, Path, description = "Discord guild ID")),
    responses(
        (status = 200, description = "Guild state", body = GuildDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bot is not in this guild", body = ErrorDto),
        (status = 502, description = "Bot API unreachable", body = ErrorDto),
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let guild = state.bot_api.get_guild(guild_id).await?;

    Ok((StatusCode::OK, Json(guild)))
}

/// Pause, resume, skip, or stop playback as the logged in user.
///
/// The bot answers with `voice_required: true` when the user is not in the guild's voice
/// channel.
#[utoipa::path(
    post,
    path = "/api/control/{guild_id}/{action}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("action" = String, Path, description = "pause, resume, skip or stop")
    ),
    responses(
        (status = 204, description = "Command accepted"),
        (status = 400, description = "Unknown action", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not in the voice channel", body = ErrorDto),
    ),
)]
pub async fn control(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, action)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let action = action
        .parse::<PlaybackAction>()
        .map_err(AppError::BadRequest)?;

    state
        .bot_api
        .control(guild_id, action, &current.actor())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a track from the queue as the logged in user.
///
/// # Access Control
/// - `LoggedIn` - The bot decides whether the user may edit the queue
///
/// # Arguments
/// - `guild_id` - Guild whose queue is edited
/// - `position` - 1-based queue position
///
/// # Returns
/// - `204 No Content` - Track removed
/// - `400 Bad Request` - Position is zero
/// - `403 Forbidden` - Not in the voice channel (`voice_required: true`)
#[utoipa::path(
    post,
    path = "/api/queue/{guild_id}/remove/{position}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("position" = u32, Path, description = "1-based queue position")
    ),
    responses(
        (status = 204, description = "Track removed"),
        (status = 400, description = "Invalid position", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not in the voice channel", body = ErrorDto),
    ),
)]
pub async fn remove_from_queue(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, position)): Path<(u64, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if position == 0 {
        return Err(AppError::BadRequest(
            "Queue positions start at 1".to_string(),
        ));
    }

    state
        .bot_api
        .remove_from_queue(guild_id, position, &current.actor())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Move a track to another queue position as the logged in user.
///
/// # Arguments
/// - `guild_id` - Guild whose queue is edited
/// - `payload` - `from` and `to`, both 1-based
///
/// # Returns
/// - `204 No Content` - Track moved
/// - `400 Bad Request` - A position is zero
/// - `403 Forbidden` - Not in the voice channel
#[utoipa::path(
    post,
    path = "/api/queue/{guild_id}/move",
    tag = GUILD_TAG,
    params(("guild_id" = u64, Path, description = "Discord guild ID")),
    request_body = MoveQueueDto,
    responses(
        (status = 204, description = "Track moved"),
        (status = 400, description = "Invalid positions", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not in the voice channel", body = ErrorDto),
    ),
)]
pub async fn move_in_queue(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<MoveQueueDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if payload.from == 0 || payload.to == 0 {
        return Err(AppError::BadRequest(
            "Queue positions start at 1".to_string(),
        ));
    }
    if payload.from == payload.to {
        return Err(AppError::BadRequest(
            "Track is already at that position".to_string(),
        ));
    }

    let request = MoveQueueRequestDto {
        from: payload.from,
        to: payload.to,
        actor: current.actor(),
    };
    state.bot_api.move_in_queue(guild_id, &request).await?;

    Ok(StatusCode::NO_CONTENT)
}

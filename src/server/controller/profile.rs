use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        profile::{UpdateAvatarDto, UpdateDisplayNameDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the logged in user's profile.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(current.user.into_dto(current.role))))
}

/// Set the display name. A blank name clears it.
#[utoipa::path(
    put,
    path = "/api/profile/name",
    tag = PROFILE_TAG,
    request_body = UpdateDisplayNameDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Name too long or invalid", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn update_display_name(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateDisplayNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = ProfileService::new(&state.db)
        .update_display_name(current.user.discord_id, &payload.display_name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(current.role))))
}

/// Store a custom avatar produced by the avatar editor.
///
/// The data URL is re-verified: it must be a base64 JPEG of exactly 256×256 pixels
/// within the 500 KiB budget.
#[utoipa::path(
    put,
    path = "/api/profile/avatar",
    tag = PROFILE_TAG,
    request_body = UpdateAvatarDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Avatar failed verification", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn update_avatar(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateAvatarDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = ProfileService::new(&state.db)
        .update_avatar(current.user.discord_id, payload.avatar)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(current.role))))
}

/// Remove the custom avatar so the Discord avatar is shown again.
#[utoipa::path(
    delete,
    path = "/api/profile/avatar",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Avatar removed", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn delete_avatar(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = ProfileService::new(&state.db)
        .clear_avatar(current.user.discord_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(current.role))))
}

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
        developer::{CreateDeveloperDto, DeveloperAccountDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::developer::DeveloperService,
        state::AppState,
    },
};

/// Tag for grouping developer access endpoints in OpenAPI documentation
pub static DEVELOPER_TAG: &str = "developer";

/// List everyone with developer console access. Visible to all developers.
#[utoipa::path(
    get,
    path = "/api/developers",
    tag = DEVELOPER_TAG,
    responses(
        (status = 200, description = "Developer accounts, owners first", body = Vec<DeveloperAccountDto>),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_developers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let accounts = DeveloperService::new(&state.db).get_all().await?;
    let dtos: Vec<DeveloperAccountDto> = accounts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Grant developer console access to a Discord user.
///
/// # Access Control
/// - `Owner` - Only owners can grant access
///
/// # Arguments
/// - `payload` - Discord ID and the name shown in the access list
///
/// # Returns
/// - `201 Created` - The new developer account
/// - `400 Bad Request` - Missing name, or the user already has access
/// - `403 Forbidden` - Caller is not an owner
#[utoipa::path(
    post,
    path = "/api/developers",
    tag = DEVELOPER_TAG,
    request_body = CreateDeveloperDto,
    responses(
        (status = 201, description = "Developer added", body = DeveloperAccountDto),
        (status = 400, description = "Already has access or missing name", body = ErrorDto),
        (status = 403, description = "Owner access required", body = ErrorDto),
    ),
)]
pub async fn add_developer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDeveloperDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let account = DeveloperService::new(&state.db)
        .add_developer(payload.discord_id, payload.name, current.user.discord_id)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Revoke developer console access.
///
/// # Access Control
/// - `Owner` - Only owners can revoke access
///
/// # Arguments
/// - `discord_id` - Discord ID of the developer to remove
///
/// # Returns
/// - `204 No Content` - Access revoked
/// - `400 Bad Request` - The account is an owner; owners cannot be removed
/// - `403 Forbidden` - Caller is not an owner
/// - `404 Not Found` - No access entry for that ID
#[utoipa::path(
    delete,
    path = "/api/developers/{discord_id}",
    tag = DEVELOPER_TAG,
    params(("discord_id" = u64, Path, description = "Discord user ID")),
    responses(
        (status = 204, description = "Access revoked"),
        (status = 400, description = "Owners cannot be removed", body = ErrorDto),
        (status = 403, description = "Owner access required", body = ErrorDto),
        (status = 404, description = "No such developer", body = ErrorDto),
    ),
)]
pub async fn remove_developer(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    DeveloperService::new(&state.db)
        .remove_developer(discord_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

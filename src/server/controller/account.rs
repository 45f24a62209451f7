use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AuthUserDto, MfaMethodDto, SecurityLogEntryDto, UpdateAccountStatusDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Account IDs are interpolated into bot API paths, so only URL-safe IDs are forwarded.
fn validate_account_id(id: &str) -> Result<(), AppError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid account ID".to_string()))
    }
}

/// List auth accounts from the bot.
///
/// # Access Control
/// - `Developer` - Only developers can browse accounts
///
/// # Returns
/// - `200 OK` - Every auth account the bot knows about
/// - `403 Forbidden` - Caller is not a developer
/// - `502 Bad Gateway` - Bot API unreachable
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Auth accounts", body = Vec<AuthUserDto>),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;

    let accounts = state.bot_api.get_accounts().await?;

    Ok((StatusCode::OK, Json(accounts)))
}

/// List the MFA methods an account has enrolled.
///
/// # Access Control
/// - `Developer` - Only developers can view MFA enrollment
///
/// # Arguments
/// - `id` - Bot API account ID, checked for URL-safe characters before forwarding
///
/// # Returns
/// - `200 OK` - Enrolled methods
/// - `400 Bad Request` - ID contains characters outside `[A-Za-z0-9_-]`
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    get,
    path = "/api/accounts/{id}/mfa",
    tag = ACCOUNT_TAG,
    params(("id" = String, Path, description = "Auth account ID")),
    responses(
        (status = 200, description = "Enrolled MFA methods", body = Vec<MfaMethodDto>),
        (status = 400, description = "Invalid account ID", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_mfa_methods(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;
    validate_account_id(&id)?;

    let methods = state.bot_api.get_mfa_methods(&id).await?;

    Ok((StatusCode::OK, Json(methods)))
}

/// Get the security log of an account, newest first.
///
/// # Access Control
/// - `Developer` - Only developers can view security logs
///
/// # Arguments
/// - `id` - Bot API account ID
///
/// # Returns
/// - `200 OK` - Log entries
/// - `400 Bad Request` - Invalid account ID
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    get,
    path = "/api/accounts/{id}/security-log",
    tag = ACCOUNT_TAG,
    params(("id" = String, Path, description = "Auth account ID")),
    responses(
        (status = 200, description = "Security log, newest first", body = Vec<SecurityLogEntryDto>),
        (status = 400, description = "Invalid account ID", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn get_security_log(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;
    validate_account_id(&id)?;

    let mut entries = state.bot_api.get_security_log(&id).await?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok((StatusCode::OK, Json(entries)))
}

/// Activate, suspend, or ban an account. Suspending and banning require a reason.
///
/// # Access Control
/// - `Developer` - Any developer can change account status
///
/// # Arguments
/// - `id` - Bot API account ID
/// - `payload` - New status and optional reason
///
/// # Returns
/// - `200 OK` - Account after the change
/// - `400 Bad Request` - Invalid ID, or suspend/ban without a reason
/// - `403 Forbidden` - Caller is not a developer
#[utoipa::path(
    put,
    path = "/api/accounts/{id}/status",
    tag = ACCOUNT_TAG,
    params(("id" = String, Path, description = "Auth account ID")),
    request_body = UpdateAccountStatusDto,
    responses(
        (status = 200, description = "Updated account", body = AuthUserDto),
        (status = 400, description = "Invalid ID or missing reason", body = ErrorDto),
        (status = 403, description = "Developer access required", body = ErrorDto),
    ),
)]
pub async fn update_account_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAccountStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Developer])
        .await?;
    validate_account_id(&id)?;
    payload.validate().map_err(AppError::BadRequest)?;

    let account = state.bot_api.update_account_status(&id, &payload).await?;

    Ok((StatusCode::OK, Json(account)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_ids_must_be_path_safe() {
        assert!(validate_account_id("usr_01HF-9").is_ok());
        assert!(validate_account_id("").is_err());
        assert!(validate_account_id("../admin").is_err());
        assert!(validate_account_id("a b").is_err());
    }
}

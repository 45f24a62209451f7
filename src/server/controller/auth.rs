use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, OAuthFlowSession},
        },
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// Owner bootstrap code printed at startup.
    pub code: Option<String>,
}

#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// Start a Discord login.
///
/// Stores a CSRF token in the session and redirects to Discord. When `code` matches the
/// owner bootstrap code, the session is flagged so the callback grants owner access.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(("code" = Option<String>, Query, description = "Owner bootstrap code")),
    responses(
        (status = 307, description = "Redirect to Discord"),
        (status = 400, description = "Invalid or expired bootstrap code", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(code) = params.code {
        if !state.owner_code_service.validate_and_consume(&code).await {
            return Err(AppError::BadRequest(
                "Invalid or expired owner code".to_string(),
            ));
        }
        OAuthFlowSession::new(&session).set_owner_flag(true).await?;
    }

    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_user_url,
    );
    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish a Discord login and redirect to the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the dashboard"),
        (status = 400, description = "CSRF mismatch or failed code exchange", body = ErrorDto),
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let set_owner = OAuthFlowSession::new(&session).take_owner_flag().await?;

    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_user_url,
    );
    let user = auth_service.callback(params.code, set_owner).await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.discord_id).await?;

    let destination = if set_owner { "/dev/access" } else { "/" };

    Ok(Redirect::temporary(destination))
}

/// Clear the session and redirect to the landing page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses((status = 307, description = "Session cleared, redirect home")),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

/// Get the logged in user with their profile settings and developer role.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(current.user.into_dto(current.role))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}

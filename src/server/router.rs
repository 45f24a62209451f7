//! API routes and OpenAPI documentation.
//!
//! Routes are registered through `utoipa_axum` so the OpenAPI document served at
//! `/api/docs` always matches the mounted handlers. Login routes are rate limited.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{account, admin, auth, developer, guild, profile, ticket},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Sonora Dashboard API"),
    tags(
        (name = "auth", description = "Discord login and session"),
        (name = "profile", description = "Display name and avatar"),
        (name = "guild", description = "Playback and queue control, forwarded to the bot"),
        (name = "ticket", description = "Support tickets, forwarded to the bot"),
        (name = "account", description = "Auth accounts and MFA, forwarded to the bot"),
        (name = "admin", description = "Bot process control and changelog"),
        (name = "developer", description = "Developer console access"),
    )
)]
struct ApiDoc;

/// Login attempts across all clients: a burst of 20, refilled one per second.
const LOGIN_BURST: u32 = 20;
const LOGIN_REFILL_SECONDS: u64 = 1;

pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (api_router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(profile::get_profile))
        .routes(routes!(profile::update_display_name))
        .routes(routes!(profile::update_avatar, profile::delete_avatar))
        .routes(routes!(guild::get_guild))
        .routes(routes!(guild::control))
        .routes(routes!(guild::remove_from_queue))
        .routes(routes!(guild::move_in_queue))
        .routes(routes!(ticket::get_tickets))
        .routes(routes!(ticket::get_ticket))
        .routes(routes!(ticket::update_ticket_status))
        .routes(routes!(ticket::post_ticket_message))
        .routes(routes!(account::get_accounts))
        .routes(routes!(account::get_mfa_methods))
        .routes(routes!(account::get_security_log))
        .routes(routes!(account::update_account_status))
        .routes(routes!(admin::get_status))
        .routes(routes!(admin::send_command))
        .routes(routes!(admin::set_maintenance))
        .routes(routes!(
            admin::get_changelog,
            admin::create_changelog_entry
        ))
        .routes(routes!(admin::delete_changelog_entry))
        .routes(routes!(developer::get_developers, developer::add_developer))
        .routes(routes!(developer::remove_developer))
        .split_for_parts();

    let (login_router, login_api) = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .split_for_parts();
    api.merge(login_api);

    let governor = GovernorConfigBuilder::default()
        .key_extractor(GlobalKeyExtractor)
        .per_second(LOGIN_REFILL_SECONDS)
        .burst_size(LOGIN_BURST)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;
    let login_router = login_router.layer(GovernorLayer::new(Arc::new(governor)));

    let origin = HeaderValue::from_str(&config.app_url)
        .map_err(|e| AppError::InternalError(format!("Invalid APP_URL: {}", e)))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    Ok(api_router
        .merge(login_router)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors))
}

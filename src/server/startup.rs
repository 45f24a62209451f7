use dioxus_logger::tracing;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::developer::DeveloperRepository,
    error::AppError,
    service::{bot_api::BotApiClient, owner_code::OwnerCodeService},
    state::OAuth2Client,
};

const BOT_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the SQLite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same SQLite database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for Discord calls. Redirects are disabled to avoid SSRF through
/// attacker-controlled redirects.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the bot API client from `BOT_API_URL` and `BOT_API_TOKEN`.
///
/// Uses its own reqwest client with redirects disabled and a request timeout.
///
/// # Returns
/// - `Ok(BotApiClient)` - Client ready to use
/// - `Err(AppError::ReqwestErr)` - Failed to build the HTTP client
pub fn setup_bot_api_client(config: &Config) -> Result<BotApiClient, AppError> {
    let http_client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(BOT_API_TIMEOUT)
        .build()?;

    Ok(BotApiClient::new(
        http_client,
        config.bot_api_url.clone(),
        config.bot_api_token.clone(),
    ))
}

/// Configures the Discord OAuth2 client.
///
/// # Arguments
/// - `config` - Client ID, secret, redirect URL, and Discord endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token, and redirect URLs set
/// - `Err(AppError)` - One of the URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url =
        |name: &str, e: url::ParseError| AppError::InternalError(format!("Invalid {}: {}", name, e));

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| invalid_url("Discord auth URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|e| invalid_url("Discord token URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Generates an owner bootstrap code and logs its login link when no owner exists.
///
/// The code is valid for five minutes; restart the server for a new one.
///
/// # Returns
/// - `Ok(())` - An owner exists, or a code was generated and logged
/// - `Err(AppError)` - Database error while checking for owners
pub async fn check_for_owner(
    db: &DatabaseConnection,
    config: &Config,
    owner_code_service: &OwnerCodeService,
) -> Result<(), AppError> {
    if DeveloperRepository::new(db).owner_exists().await? {
        return Ok(());
    }

    let code = owner_code_service.generate().await;

    tracing::info!(
        "No owner account exists. Log in within 5 minutes to become owner: {}/api/auth/login?code={}",
        config.app_url,
        code
    );

    Ok(())
}

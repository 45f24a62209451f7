use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Server configuration read from the environment at startup.
pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_user_url: String,

    /// Public URL of the dashboard, used in the owner bootstrap link.
    pub app_url: String,

    /// Base URL of the bot API, without a trailing slash.
    pub bot_api_url: String,
    /// Bearer token presented to the bot API.
    pub bot_api_token: String,
}

impl Config {
    /// Reads every required variable, after `dotenvy` has loaded `.env`.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present
    /// - `Err(ConfigError::MissingEnvVar)` - The first missing variable, by name
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_user_url: DISCORD_USER_URL.to_string(),
            app_url: require_env("APP_URL")?.trim_end_matches('/').to_string(),
            bot_api_url: require_env("BOT_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            bot_api_token: require_env("BOT_API_TOKEN")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's state
//! extraction. Every field is cheap to clone: the database handle and HTTP clients are
//! pools behind `Arc`s, and `OwnerCodeService` shares its code through `Arc<RwLock<_>>`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::{bot_api::BotApiClient, owner_code::OwnerCodeService};

/// OAuth2 client configured for Discord with auth and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API calls, configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Holds the owner bootstrap code while no owner exists.
    pub owner_code_service: OwnerCodeService,

    /// Client for the bot API that guild, ticket, account, and admin calls go to.
    pub bot_api: BotApiClient,

    /// Discord endpoint returning the authenticated user.
    pub discord_user_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        owner_code_service: OwnerCodeService,
        bot_api: BotApiClient,
        discord_user_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            owner_code_service,
            bot_api,
            discord_user_url,
        }
    }
}

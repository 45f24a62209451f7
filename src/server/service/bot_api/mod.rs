//! Typed client for the external bot API.
//!
//! The bot API owns playback, queues, tickets, auth accounts, and process control. Every
//! request carries the configured bearer token; non-2xx responses become
//! [`BotApiError::Status`] with the upstream message and `voice_required` flag.

use axum::http::StatusCode;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::error::bot_api::BotApiError;

pub mod account;
pub mod admin;
pub mod guild;
pub mod ticket;

#[cfg(test)]
mod test;

/// HTTP client for the bot API, shared through `AppState`.
///
/// Cloning is cheap; the inner `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct BotApiClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Error body returned by the bot API. Older endpoints use `message` instead of `error`.
#[derive(Deserialize, Default)]
struct UpstreamError {
    error: Option<String>,
    message: Option<String>,
    #[serde(default)]
    voice_required: bool,
}

impl BotApiClient {
    /// Creates a client for the bot API.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client from startup
    /// - `base_url` - Bot API origin, a trailing slash is ignored
    /// - `token` - Bearer token sent with every request
    pub fn new(http_client: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BotApiError> {
        let response = self.request(Method::GET, path).send().await?;
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, BotApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path).json(body).send().await?;
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    /// Sends a command whose response body is ignored.
    async fn send_command<B>(&self, method: Method, path: &str, body: &B) -> Result<(), BotApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), BotApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Passes 2xx responses through and turns everything else into
    /// [`BotApiError::Status`], reading `error` (or `message`) and `voice_required` from
    /// the body when it is JSON.
    async fn check(response: Response) -> Result<Response, BotApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let upstream = serde_json::from_str::<UpstreamError>(&body).unwrap_or_default();
        let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

        let message = upstream
            .error
            .or(upstream.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

        Err(BotApiError::Status {
            status,
            message,
            voice_required: upstream.voice_required,
        })
    }
}

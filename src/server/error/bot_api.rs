use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the bot API.
#[derive(Error, Debug)]
pub enum BotApiError {
    /// The bot API answered with a non-2xx status.
    ///
    /// `message` is the upstream `error` field when the body was an error object, and
    /// `voice_required` is preserved so the guild page can tell the user to join the
    /// voice channel.
    #[error("Bot API returned {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        voice_required: bool,
    },

    /// The bot API could not be reached or its body could not be decoded.
    #[error("Bot API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Upstream 4xx responses are passed through with their message; everything else
/// becomes 502 Bad Gateway.
impl IntoResponse for BotApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Status {
                status,
                message,
                voice_required,
            } if status.is_client_error() => {
                tracing::debug!("Bot API rejected request ({}): {}", status, message);
                (
                    status,
                    Json(ErrorDto {
                        error: message,
                        voice_required,
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::warn!("{}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("The bot is unreachable right now.")),
                )
                    .into_response()
            }
        }
    }
}

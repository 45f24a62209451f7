use dioxus::prelude::*;

use crate::client::model::error::ApiError;

#[cfg(feature = "web")]
use crate::client::constant::BANNER_TIMEOUT_MS;

#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Banner::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Banner::Error(text.into())
    }

    /// Playback commands refused for voice presence get a fixed, actionable message.
    pub fn from_api_error(err: &ApiError) -> Self {
        if err.voice_required {
            Banner::Error("Join the bot's voice channel to control playback.".to_string())
        } else {
            Banner::Error(err.message.clone())
        }
    }

    fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Error(text) => text,
        }
    }

    fn alert_class(&self) -> &'static str {
        match self {
            Banner::Success(_) => "alert-success",
            Banner::Error(_) => "alert-error",
        }
    }
}

/// Inline alert that clears itself after a few seconds or on dismiss.
#[component]
pub fn StatusBanner(mut message: Signal<Option<Banner>>) -> Element {
    // Re-runs on every new message, cancelling the previous timer
    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        if message().is_some() {
            gloo_timers::future::TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            message.set(None);
        }
    });

    let Some(banner) = message() else {
        return rsx!();
    };

    rsx!(
        div {
            role: "alert",
            class: "alert {banner.alert_class()} mb-4 flex justify-between",
            span { "{banner.text()}" }
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| message.set(None),
                "✕"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_required_error_gets_voice_message() {
        let err = ApiError {
            status: 403,
            message: "forbidden".to_string(),
            voice_required: true,
        };

        assert_eq!(
            Banner::from_api_error(&err),
            Banner::error("Join the bot's voice channel to control playback.")
        );
    }

    #[test]
    fn other_errors_keep_server_message() {
        let err = ApiError::new(502, "Bot API unreachable");

        assert_eq!(Banner::from_api_error(&err), Banner::error("Bot API unreachable"));
    }
}

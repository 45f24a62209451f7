use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `voice_required` is forwarded from the bot API when a playback or queue command was
/// refused because the user is not in the guild's voice channel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub voice_required: bool,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            voice_required: false,
        }
    }
}

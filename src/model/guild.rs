use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Guild snapshot as returned by the bot API's `GET /api/guild/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    /// Name of the voice channel the bot is connected to, if any.
    pub voice_channel: Option<String>,
    pub current_track: Option<TrackDto>,
    #[serde(default)]
    pub queue: Vec<QueueEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TrackDto {
    pub title: String,
    pub artist: String,
    /// Track length in seconds.
    pub duration: u64,
    /// Playback position in seconds.
    #[serde(default)]
    pub current_time: u64,
    pub artwork: Option<String>,
    pub requested_by: Option<String>,
    #[serde(default)]
    pub paused: bool,
}

impl TrackDto {
    /// Playback progress in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.current_time.min(self.duration) as f64 / self.duration as f64) * 100.0
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct QueueEntryDto {
    pub position: u32,
    pub title: String,
    pub artist: String,
    pub duration: u64,
}

/// Playback commands accepted by `POST /api/control/{guild_id}/{action}`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlaybackAction {
    Pause,
    Resume,
    Skip,
    Stop,
}

impl PlaybackAction {
    pub const ALL: [PlaybackAction; 4] = [Self::Pause, Self::Resume, Self::Skip, Self::Stop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Skip => "skip",
            Self::Stop => "stop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Skip => "Skip",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("Unknown playback action '{}'", s))
    }
}

/// Actor identity attached to every playback and queue command forwarded to the bot
/// API. Filled in by the server from the session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActorDto {
    pub username: String,
    pub user_id: String,
}

/// Body of `POST /api/queue/{guild_id}/move` as sent by the browser.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MoveQueueDto {
    pub from: u32,
    pub to: u32,
}

/// Body forwarded to the bot API for a queue move.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MoveQueueRequestDto {
    pub from: u32,
    pub to: u32,
    #[serde(flatten)]
    pub actor: ActorDto,
}

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action() {
        for action in PlaybackAction::ALL {
            assert_eq!(action.as_str().parse::<PlaybackAction>(), Ok(action));
        }
        assert!("shuffle".parse::<PlaybackAction>().is_err());
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(75), "1:15");
        assert_eq!(format_duration(3_725), "1:02:05");
    }

    #[test]
    fn progress_is_bounded() {
        let mut track = TrackDto {
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            duration: 200,
            current_time: 50,
            artwork: None,
            requested_by: None,
            paused: false,
        };
        assert_eq!(track.progress_percent(), 25.0);

        track.current_time = 500;
        assert_eq!(track.progress_percent(), 100.0);

        track.duration = 0;
        assert_eq!(track.progress_percent(), 0.0);
    }

    #[test]
    fn deserializes_bot_api_guild() {
        let json = r#"{
            "id": "123456789012345678",
            "name": "Lo-fi Lounge",
            "icon": null,
            "member_count": 42,
            "voice_channel": "Music",
            "current_track": {
                "title": "Night Drive",
                "artist": "Synth Cat",
                "duration": 240,
                "current_time": 30,
                "artwork": null,
                "requested_by": "alice",
                "paused": true
            },
            "queue": [
                { "position": 1, "title": "Rain", "artist": "Calm", "duration": 180 }
            ]
        }"#;

        let guild: GuildDto = serde_json::from_str(json).unwrap();

        assert_eq!(guild.id, 123456789012345678);
        assert!(guild.current_track.unwrap().paused);
        assert_eq!(guild.queue.len(), 1);
    }

    #[test]
    fn move_request_flattens_actor() {
        let body = MoveQueueRequestDto {
            from: 3,
            to: 1,
            actor: ActorDto {
                username: "alice".to_string(),
                user_id: "42".to_string(),
            },
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["from"], 3);
        assert_eq!(value["username"], "alice");
        assert_eq!(value["user_id"], "42");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Process-wide bot commands issued from the developer console.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BotCommand {
    Shutdown,
    Restart,
    Pause,
    Resume,
}

impl BotCommand {
    pub const ALL: [BotCommand; 4] = [Self::Shutdown, Self::Restart, Self::Pause, Self::Resume];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shutdown => "shutdown",
            Self::Restart => "restart",
            Self::Pause => "pause",
            Self::Resume => "resume",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Shutdown => "Shutdown",
            Self::Restart => "Restart",
            Self::Pause => "Pause all",
            Self::Resume => "Resume all",
        }
    }

    /// Shutdown and restart take the bot offline and are reserved for owners.
    pub fn requires_owner(&self) -> bool {
        matches!(self, Self::Shutdown | Self::Restart)
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| format!("Unknown bot command '{}'", s))
    }
}

/// Longest maintenance banner the bot accepts, in characters.
pub const MAX_MAINTENANCE_MESSAGE_LEN: usize = 500;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MaintenanceDto {
    pub enabled: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BotStatusDto {
    pub online: bool,
    /// Global pause across every guild.
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub maintenance: MaintenanceDto,
    #[serde(default)]
    pub guild_count: u32,
    #[serde(default)]
    pub active_players: u32,
    #[serde(default)]
    pub uptime_seconds: u64,
    pub version: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChangelogEntryDto {
    pub id: String,
    pub version: String,
    pub title: String,
    /// Markdown body.
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateChangelogEntryDto {
    pub version: String,
    pub title: String,
    pub body: String,
}

impl CreateChangelogEntryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.version.trim().is_empty() {
            return Err("Version is required".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.body.trim().is_empty() {
            return Err("Changelog body is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_disruptive_commands_require_owner() {
        assert!(BotCommand::Shutdown.requires_owner());
        assert!(BotCommand::Restart.requires_owner());
        assert!(!BotCommand::Pause.requires_owner());
        assert!(!BotCommand::Resume.requires_owner());
    }

    #[test]
    fn parses_commands() {
        assert_eq!("restart".parse(), Ok(BotCommand::Restart));
        assert!("reboot".parse::<BotCommand>().is_err());
    }

    #[test]
    fn status_tolerates_missing_fields() {
        let status: BotStatusDto =
            serde_json::from_str(r#"{"online": true, "version": null}"#).unwrap();

        assert!(status.online);
        assert!(!status.maintenance.enabled);
    }

    #[test]
    fn changelog_entry_requires_all_fields() {
        let mut entry = CreateChangelogEntryDto {
            version: "1.4.0".to_string(),
            title: "Queue moves".to_string(),
            body: "- Move tracks up and down".to_string(),
        };
        assert!(entry.validate().is_ok());

        entry.title = " ".to_string();
        assert!(entry.validate().is_err());
    }
}

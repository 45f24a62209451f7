use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Ticket lifecycle: `pending -> in_progress -> resolved | closed`.
///
/// A pending ticket may be closed without being worked on, and a resolved or closed
/// ticket may be reopened back to `in_progress`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        use TicketStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress)
                | (Pending, Closed)
                | (InProgress, Resolved)
                | (InProgress, Closed)
                | (Resolved, InProgress)
                | (Closed, InProgress)
        )
    }

    /// Statuses reachable from this one, in lifecycle order.
    pub fn next_statuses(&self) -> Vec<TicketStatus> {
        Self::ALL
            .into_iter()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown ticket status '{}'", s))
    }
}

/// Support ticket reference in the form `SONORA-XXXX-XXXX` with `X` in `[A-Z0-9]`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct TicketCode(String);

impl TicketCode {
    pub const PREFIX: &'static str = "SONORA";

    /// Parses a code, accepting surrounding whitespace and lowercase input.
    pub fn parse(input: &str) -> Result<Self, String> {
        let code = input.trim().to_ascii_uppercase();
        let mut parts = code.split('-');

        let valid = parts.next() == Some(Self::PREFIX)
            && parts.by_ref().take(2).filter(|group| Self::is_group(group)).count() == 2
            && parts.next().is_none()
            && code.len() == Self::PREFIX.len() + 10;

        if valid {
            Ok(Self(code))
        } else {
            Err(format!(
                "Invalid ticket code '{}', expected {}-XXXX-XXXX",
                input.trim(),
                Self::PREFIX
            ))
        }
    }

    fn is_group(group: &str) -> bool {
        group.len() == 4
            && group
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TicketCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TicketCode> for String {
    fn from(code: TicketCode) -> Self {
        code.0
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketSummaryDto {
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub code: TicketCode,
    pub subject: String,
    pub status: TicketStatus,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketDto {
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub code: TicketCode,
    pub subject: String,
    pub status: TicketStatus,
    pub user_name: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<TicketMessageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketMessageDto {
    pub author: String,
    /// Whether the message was sent by a staff member from the dashboard.
    #[serde(default)]
    pub staff: bool,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateTicketStatusDto {
    pub status: TicketStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PostTicketMessageDto {
    pub content: String,
}

/// Staff reply forwarded to the bot API, with the author taken from the session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TicketReplyRequestDto {
    pub content: String,
    pub author: String,
    pub author_id: String,
    pub staff: bool,
}

pub const MAX_TICKET_MESSAGE_LEN: usize = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    mod ticket_code {
        use super::*;

        #[test]
        fn accepts_valid_codes() {
            let code = TicketCode::parse("SONORA-AB12-9XYZ").unwrap();
            assert_eq!(code.as_str(), "SONORA-AB12-9XYZ");
        }

        #[test]
        fn normalizes_case_and_whitespace() {
            let code = TicketCode::parse("  sonora-ab12-9xyz ").unwrap();
            assert_eq!(code.to_string(), "SONORA-AB12-9XYZ");
        }

        #[test]
        fn rejects_malformed_codes() {
            for input in [
                "",
                "SONORA",
                "SONORA-AB12",
                "SONORA-AB12-9XY",
                "SONORA-AB12-9XYZ-0000",
                "TICKET-AB12-9XYZ",
                "SONORA-AB_2-9XYZ",
                "SONORA--AB12-9XYZ",
            ] {
                assert!(TicketCode::parse(input).is_err(), "accepted '{}'", input);
            }
        }

        #[test]
        fn deserialization_validates() {
            assert!(serde_json::from_str::<TicketCode>(r#""SONORA-0000-ZZZZ""#).is_ok());
            assert!(serde_json::from_str::<TicketCode>(r#""nope""#).is_err());
        }
    }

    mod status {
        use super::*;

        #[test]
        fn follows_lifecycle() {
            use TicketStatus::*;

            assert!(Pending.can_transition_to(InProgress));
            assert!(Pending.can_transition_to(Closed));
            assert!(InProgress.can_transition_to(Resolved));
            assert!(InProgress.can_transition_to(Closed));
            assert!(Resolved.can_transition_to(InProgress));
            assert!(Closed.can_transition_to(InProgress));

            assert!(!Pending.can_transition_to(Resolved));
            assert!(!Resolved.can_transition_to(Closed));
            assert!(!Closed.can_transition_to(Pending));
        }

        #[test]
        fn never_transitions_to_itself() {
            for status in TicketStatus::ALL {
                assert!(!status.can_transition_to(status));
            }
        }

        #[test]
        fn next_statuses_in_order() {
            assert_eq!(
                TicketStatus::InProgress.next_statuses(),
                vec![TicketStatus::Resolved, TicketStatus::Closed]
            );
        }

        #[test]
        fn serializes_snake_case() {
            assert_eq!(
                serde_json::to_string(&TicketStatus::InProgress).unwrap(),
                r#""in_progress""#
            );
            assert_eq!("in_progress".parse(), Ok(TicketStatus::InProgress));
        }
    }
}

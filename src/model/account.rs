use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Banned,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 3] = [Self::Active, Self::Suspended, Self::Banned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Banned => "banned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Banned => "Banned",
        }
    }

    /// Suspending or banning an account must carry a reason for the security log.
    pub fn requires_reason(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account registered with the bot's own authentication service.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AuthUserDto {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub mfa_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MfaMethodDto {
    /// e.g. `totp`, `webauthn`, `backup_codes`
    pub kind: String,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SecurityLogEntryDto {
    pub event: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAccountStatusDto {
    pub status: AccountStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl UpdateAccountStatusDto {
    pub fn validate(&self) -> Result<(), String> {
        let has_reason = self
            .reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty());

        if self.status.requires_reason() && !has_reason {
            return Err(format!(
                "A reason is required to mark an account as {}",
                self.status
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspension_requires_reason() {
        let update = UpdateAccountStatusDto {
            status: AccountStatus::Suspended,
            reason: Some("   ".to_string()),
        };
        assert!(update.validate().is_err());

        let update = UpdateAccountStatusDto {
            status: AccountStatus::Banned,
            reason: Some("Spam".to_string()),
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn reactivation_needs_no_reason() {
        let update = UpdateAccountStatusDto {
            status: AccountStatus::Active,
            reason: None,
        };
        assert!(update.validate().is_ok());
    }
}

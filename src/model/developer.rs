use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DeveloperRole {
    Owner,
    Developer,
}

impl DeveloperRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Developer => "developer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Developer => "Developer",
        }
    }
}

impl fmt::Display for DeveloperRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeveloperRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "developer" => Ok(Self::Developer),
            other => Err(format!("Unknown developer role '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeveloperAccountDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub name: String,
    pub role: DeveloperRole,
    #[serde(with = "crate::model::id::option_u64_string", default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub added_by: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateDeveloperDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub name: String,
}

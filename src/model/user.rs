use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::developer::DeveloperRole;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    /// Discord username.
    pub name: String,
    pub display_name: Option<String>,
    /// Custom avatar as a JPEG data URL.
    pub avatar: Option<String>,
    /// Developer role, `None` for regular users.
    pub role: Option<DeveloperRole>,
}

impl UserDto {
    /// Name shown in the header, preferring the custom display name.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_developer(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_owner(&self) -> bool {
        self.role == Some(DeveloperRole::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<DeveloperRole>) -> UserDto {
        UserDto {
            discord_id: 1,
            name: "alice".to_string(),
            display_name: None,
            avatar: None,
            role,
        }
    }

    #[test]
    fn owners_are_developers() {
        let owner = user(Some(DeveloperRole::Owner));
        assert!(owner.is_owner());
        assert!(owner.is_developer());

        let developer = user(Some(DeveloperRole::Developer));
        assert!(!developer.is_owner());
        assert!(developer.is_developer());

        assert!(!user(None).is_developer());
    }

    #[test]
    fn prefers_display_name() {
        let mut dto = user(None);
        assert_eq!(dto.shown_name(), "alice");

        dto.display_name = Some("Alice ♪".to_string());
        assert_eq!(dto.shown_name(), "Alice ♪");
    }
}

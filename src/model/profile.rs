use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

pub const MAX_DISPLAY_NAME_LEN: usize = 32;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateDisplayNameDto {
    /// An empty name clears the display name.
    pub display_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAvatarDto {
    /// JPEG data URL produced by the avatar editor.
    pub avatar: String,
}

/// Trims the name and returns `None` when it is empty.
///
/// Names longer than [`MAX_DISPLAY_NAME_LEN`] characters or containing control
/// characters are rejected.
pub fn normalize_display_name(input: &str) -> Result<Option<String>, String> {
    let name = input.trim();

    if name.is_empty() {
        return Ok(None);
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(format!(
            "Display name must be at most {} characters",
            MAX_DISPLAY_NAME_LEN
        ));
    }
    if name.chars().any(char::is_control) {
        return Err("Display name contains invalid characters".to_string());
    }

    Ok(Some(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_name() {
        assert_eq!(
            normalize_display_name("  DJ Alice  "),
            Ok(Some("DJ Alice".to_string()))
        );
    }

    #[test]
    fn blank_clears_name() {
        assert_eq!(normalize_display_name("   "), Ok(None));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let name = "é".repeat(MAX_DISPLAY_NAME_LEN);
        assert!(normalize_display_name(&name).is_ok());

        let name = "é".repeat(MAX_DISPLAY_NAME_LEN + 1);
        assert!(normalize_display_name(&name).is_err());
    }

    #[test]
    fn rejects_control_characters() {
        assert!(normalize_display_name("bad\nname").is_err());
    }
}

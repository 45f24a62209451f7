use crate::model::api::ErrorDto;

/// Failed backend call as seen by a page.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    /// The bot refused a playback command because the caller is not in its voice channel.
    pub voice_required: bool,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            voice_required: false,
        }
    }

    pub fn from_dto(status: u64, dto: ErrorDto) -> Self {
        Self {
            status,
            message: dto.error,
            voice_required: dto.voice_required,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_voice_required_flag_from_dto() {
        let dto = ErrorDto {
            error: "Join the voice channel first".to_string(),
            voice_required: true,
        };

        let error = ApiError::from_dto(403, dto);

        assert_eq!(error.status, 403);
        assert!(error.voice_required);
        assert_eq!(error.to_string(), "Join the voice channel first");
    }

    #[test]
    fn new_error_is_not_voice_related() {
        let error = ApiError::new(401, "Not logged in");

        assert!(!error.voice_required);
        assert!(error.is_unauthorized());
    }
}

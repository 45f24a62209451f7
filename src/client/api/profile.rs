use crate::{
    client::{
        api::helper::{delete, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        profile::{UpdateAvatarDto, UpdateDisplayNameDto},
        user::UserDto,
    },
};

/// Sets the display name. An empty name clears it back to the Discord username.
pub async fn update_display_name(display_name: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&UpdateDisplayNameDto { display_name })?;
    let response = send_request(put("/api/profile/name").body(body)).await?;
    parse_response(response).await
}

/// Uploads a compressed JPEG data URL as the custom avatar.
pub async fn update_avatar(avatar: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&UpdateAvatarDto { avatar })?;
    let response = send_request(put("/api/profile/avatar").body(body)).await?;
    parse_response(response).await
}

pub async fn clear_avatar() -> Result<UserDto, ApiError> {
    let response = send_request(delete("/api/profile/avatar")).await?;
    parse_response(response).await
}

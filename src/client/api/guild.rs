use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::guild::{GuildDto, MoveQueueDto, PlaybackAction},
};

pub async fn get_guild(guild_id: u64) -> Result<GuildDto, ApiError> {
    let url = format!("/api/guild/{}", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn send_playback_action(guild_id: u64, action: PlaybackAction) -> Result<(), ApiError> {
    let url = format!("/api/control/{}/{}", guild_id, action.as_str());
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}

pub async fn remove_from_queue(guild_id: u64, position: u32) -> Result<(), ApiError> {
    let url = format!("/api/queue/{}/remove/{}", guild_id, position);
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}

pub async fn move_in_queue(guild_id: u64, from: u32, to: u32) -> Result<(), ApiError> {
    let url = format!("/api/queue/{}/move", guild_id);
    let body = serialize_json(&MoveQueueDto { from, to })?;
    let response = send_request(post(&url).body(body)).await?;
    parse_empty_response(response).await
}

use crate::{
    client::{
        api::helper::{delete, get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::developer::{CreateDeveloperDto, DeveloperAccountDto},
};

pub async fn get_developers() -> Result<Vec<DeveloperAccountDto>, ApiError> {
    let response = send_request(get("/api/developers")).await?;
    parse_response(response).await
}

pub async fn add_developer(discord_id: u64, name: String) -> Result<DeveloperAccountDto, ApiError> {
    let body = serialize_json(&CreateDeveloperDto { discord_id, name })?;
    let response = send_request(post("/api/developers").body(body)).await?;
    parse_response(response).await
}

pub async fn remove_developer(discord_id: u64) -> Result<(), ApiError> {
    let url = format!("/api/developers/{}", discord_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

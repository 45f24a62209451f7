use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::admin::{
        BotCommand, BotStatusDto, ChangelogEntryDto, CreateChangelogEntryDto, MaintenanceDto,
    },
};

pub async fn get_bot_status() -> Result<BotStatusDto, ApiError> {
    let response = send_request(get("/api/admin/status")).await?;
    parse_response(response).await
}

pub async fn send_bot_command(command: BotCommand) -> Result<(), ApiError> {
    let url = format!("/api/admin/{}", command.as_str());
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}

pub async fn set_maintenance(maintenance: MaintenanceDto) -> Result<MaintenanceDto, ApiError> {
    let body = serialize_json(&maintenance)?;
    let response = send_request(put("/api/admin/maintenance").body(body)).await?;
    parse_response(response).await
}

pub async fn get_changelog() -> Result<Vec<ChangelogEntryDto>, ApiError> {
    let response = send_request(get("/api/admin/changelog")).await?;
    parse_response(response).await
}

pub async fn create_changelog_entry(
    entry: CreateChangelogEntryDto,
) -> Result<ChangelogEntryDto, ApiError> {
    let body = serialize_json(&entry)?;
    let response = send_request(post("/api/admin/changelog").body(body)).await?;
    parse_response(response).await
}

pub async fn delete_changelog_entry(id: &str) -> Result<(), ApiError> {
    let url = format!("/api/admin/changelog/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::account::{
        AccountStatus, AuthUserDto, MfaMethodDto, SecurityLogEntryDto, UpdateAccountStatusDto,
    },
};

pub async fn get_accounts() -> Result<Vec<AuthUserDto>, ApiError> {
    let response = send_request(get("/api/accounts")).await?;
    parse_response(response).await
}

pub async fn get_mfa_methods(account_id: &str) -> Result<Vec<MfaMethodDto>, ApiError> {
    let url = format!("/api/accounts/{}/mfa", account_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_security_log(account_id: &str) -> Result<Vec<SecurityLogEntryDto>, ApiError> {
    let url = format!("/api/accounts/{}/security-log", account_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_account_status(
    account_id: &str,
    status: AccountStatus,
    reason: Option<String>,
) -> Result<AuthUserDto, ApiError> {
    let url = format!("/api/accounts/{}/status", account_id);
    let body = serialize_json(&UpdateAccountStatusDto { status, reason })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

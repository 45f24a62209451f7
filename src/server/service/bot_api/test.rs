//! Runs the client against a throwaway axum server on an ephemeral port.

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::{
    model::{
        guild::{ActorDto, PlaybackAction},
        ticket::{TicketCode, TicketStatus},
    },
    server::{
        error::{bot_api::BotApiError, AppError},
        service::{bot_api::BotApiClient, ticket::TicketService},
    },
};

const TOKEN: &str = "test-token";

async fn spawn(router: Router) -> BotApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    BotApiClient::new(
        reqwest::Client::new(),
        format!("http://{}/", addr),
        TOKEN.to_string(),
    )
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer test-token")
}

fn actor() -> ActorDto {
    ActorDto {
        username: "alice".to_string(),
        user_id: "42".to_string(),
    }
}

#[tokio::test]
async fn fetches_guild_with_bearer_token() {
    let router = Router::new().route(
        "/api/guild/{id}",
        get(|headers: HeaderMap, Path(id): Path<String>| async move {
            if !authorized(&headers) {
                return StatusCode::UNAUTHORIZED.into_response();
            }
            Json(json!({
                "id": id,
                "name": "Lo-fi Lounge",
                "icon": null,
                "member_count": 12,
                "voice_channel": null,
                "current_track": null,
                "queue": []
            }))
            .into_response()
        }),
    );
    let client = spawn(router).await;

    let guild = client.get_guild(987654321).await.unwrap();

    assert_eq!(guild.id, 987654321);
    assert_eq!(guild.name, "Lo-fi Lounge");
    assert!(guild.current_track.is_none());
}

#[tokio::test]
async fn preserves_voice_required_flag() {
    let router = Router::new().route(
        "/api/control/{guild_id}/{action}",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["username"], "alice");
            assert_eq!(body["user_id"], "42");
            (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": "You must be in the voice channel",
                    "voice_required": true
                })),
            )
        }),
    );
    let client = spawn(router).await;

    let err = client
        .control(1, PlaybackAction::Skip, &actor())
        .await
        .unwrap_err();

    match err {
        BotApiError::Status {
            status,
            message,
            voice_required,
        } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "You must be in the voice channel");
            assert!(voice_required);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn falls_back_to_status_reason_for_plain_errors() {
    let router = Router::new().route(
        "/api/admin/status",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let client = spawn(router).await;

    let err = client.get_status().await.unwrap_err();

    match err {
        BotApiError::Status {
            status,
            message,
            voice_required,
        } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(message, "Service Unavailable");
            assert!(!voice_required);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn forwards_ticket_status_filter() {
    let router = Router::new().route(
        "/api/tickets",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            let status = query.get("status").cloned().unwrap_or_default();
            Json(json!([{
                "code": "SONORA-AAAA-0001",
                "subject": format!("filtered by {}", status),
                "status": status,
                "user_name": "bob",
                "created_at": "2026-10-01T12:00:00Z",
                "updated_at": "2026-10-01T12:30:00Z"
            }]))
        }),
    );
    let client = spawn(router).await;

    let tickets = client
        .get_tickets(Some(TicketStatus::InProgress))
        .await
        .unwrap();

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].status, TicketStatus::InProgress);
    assert_eq!(tickets[0].subject, "filtered by in_progress");
    assert_eq!(
        tickets[0].code,
        TicketCode::parse("SONORA-AAAA-0001").unwrap()
    );
}

#[tokio::test]
async fn unreachable_api_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BotApiClient::new(
        reqwest::Client::new(),
        format!("http://{}", addr),
        TOKEN.to_string(),
    );

    assert!(matches!(
        client.get_changelog().await,
        Err(BotApiError::Request(_))
    ));
}

fn ticket_json(code: &str, status: &str) -> Value {
    json!({
        "code": code,
        "subject": "Bot left the channel",
        "status": status,
        "user_name": "bob",
        "user_id": null,
        "created_at": "2026-10-01T12:00:00Z",
        "updated_at": "2026-10-01T12:30:00Z",
        "messages": []
    })
}

/// Bot that reports every ticket as `status` and counts status updates it receives.
fn ticket_router(status: &'static str, updates: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/api/tickets/{code}",
            get(move |Path(code): Path<String>| async move { Json(ticket_json(&code, status)) }),
        )
        .route(
            "/api/tickets/{code}/status",
            axum::routing::put(
                move |Path(code): Path<String>, Json(body): Json<Value>| {
                    let updates = updates.clone();
                    async move {
                        updates.fetch_add(1, Ordering::SeqCst);
                        let next = body["status"].as_str().unwrap_or_default().to_string();
                        Json(ticket_json(&code, &next))
                    }
                },
            ),
        )
}

#[tokio::test]
async fn invalid_transition_is_rejected_before_forwarding() {
    let updates = Arc::new(AtomicUsize::new(0));
    let client = spawn(ticket_router("pending", updates.clone())).await;
    let code = TicketCode::parse("SONORA-AB12-9XYZ").unwrap();

    let result = TicketService::new(&client)
        .change_status(&code, TicketStatus::Resolved)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_transition_is_forwarded_once() {
    let updates = Arc::new(AtomicUsize::new(0));
    let client = spawn(ticket_router("in_progress", updates.clone())).await;
    let code = TicketCode::parse("SONORA-AB12-9XYZ").unwrap();

    let ticket = TicketService::new(&client)
        .change_status(&code, TicketStatus::Resolved)
        .await
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Resolved);
    assert_eq!(ticket.code, code);
    assert_eq!(updates.load(Ordering::SeqCst), 1);
}

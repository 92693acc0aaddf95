//! Drives the real HTTP client, worker and session against an in-process
//! stub of the board backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use message_board::common::NewMessage;
use message_board::ui::state::EMPTY_DRAFT_ERROR;
use message_board::{BoardSession, HealthStatus, HttpBoardApi, Message, MessageId};
use serde_json::json;

#[derive(Default)]
struct Store {
    messages: Vec<Message>,
    next_id: i64,
    requests: Vec<String>,
    unhealthy: bool,
}

type Backend = Arc<Mutex<Store>>;

async fn health(State(backend): State<Backend>) -> Response {
    let mut store = backend.lock().unwrap();
    store.requests.push("GET /api/health".to_string());
    if store.unhealthy {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database ping failed").into_response();
    }
    Json(json!({ "status": "ok", "version": "test" })).into_response()
}

async fn list(State(backend): State<Backend>) -> Response {
    let mut store = backend.lock().unwrap();
    store.requests.push("GET /api/messages".to_string());
    if store.messages.is_empty() {
        // mirrors a backend that serializes an empty result set as null
        return Json(serde_json::Value::Null).into_response();
    }
    Json(store.messages.clone()).into_response()
}

async fn create(State(backend): State<Backend>, Json(payload): Json<NewMessage>) -> Response {
    let mut store = backend.lock().unwrap();
    store.requests.push("POST /api/messages".to_string());
    if payload.content.is_empty() {
        return (StatusCode::BAD_REQUEST, "content required").into_response();
    }
    let message = push_message(&mut store, &payload.content);
    (StatusCode::CREATED, Json(message)).into_response()
}

async fn remove(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut store = backend.lock().unwrap();
    store.requests.push("DELETE /api/messages".to_string());
    let Some(id) = params.get("id").and_then(|id| id.parse::<i64>().ok()) else {
        return (StatusCode::BAD_REQUEST, "invalid id").into_response();
    };
    let before = store.messages.len();
    store.messages.retain(|message| message.id != MessageId::from(id));
    if store.messages.len() == before {
        return (StatusCode::NOT_FOUND, "message not found").into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

fn push_message(store: &mut Store, content: &str) -> Message {
    store.next_id += 1;
    let message = Message {
        id: MessageId::from(store.next_id),
        content: content.to_string(),
        created_at: Utc::now(),
    };
    // newest first
    store.messages.insert(0, message.clone());
    message
}

async fn start_backend(seed: &[&str]) -> (String, Backend) {
    let backend: Backend = Arc::default();
    {
        let mut store = backend.lock().unwrap();
        for content in seed {
            push_message(&mut store, content);
        }
    }

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/messages", get(list).post(create).delete(remove))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), backend)
}

async fn loaded_session(base_url: &str) -> BoardSession {
    let api = HttpBoardApi::new(base_url, Duration::from_secs(5)).unwrap();
    let mut session = BoardSession::spawn(api);
    session.initialize();
    session.settle().await;
    session
}

fn contents(session: &BoardSession) -> Vec<String> {
    session
        .state()
        .messages()
        .iter()
        .map(|message| message.content.clone())
        .collect()
}

#[tokio::test]
async fn test_page_load_shows_health_and_messages() {
    let (base_url, _backend) = start_backend(&["first", "second"]).await;
    let session = loaded_session(&base_url).await;

    assert_eq!(session.state().health(), HealthStatus::Ok);
    assert_eq!(session.state().backend_version(), Some("test"));
    assert_eq!(contents(&session), vec!["second", "first"]);
    assert_eq!(session.state().error(), "");
}

#[tokio::test]
async fn test_empty_board_loads_as_empty_list() {
    let (base_url, _backend) = start_backend(&[]).await;
    let session = loaded_session(&base_url).await;

    assert!(session.state().messages().is_empty());
    assert_eq!(session.state().error(), "");
}

#[tokio::test]
async fn test_post_hello_then_listed() {
    let (base_url, _backend) = start_backend(&[]).await;
    let mut session = loaded_session(&base_url).await;

    session.set_draft("hello");
    session.submit();
    session.settle().await;

    assert_eq!(contents(&session), vec!["hello"]);
    assert_eq!(session.state().draft(), "");
    assert_eq!(session.state().error(), "");
}

#[tokio::test]
async fn test_content_round_trips_verbatim() {
    let (base_url, _backend) = start_backend(&[]).await;
    let mut session = loaded_session(&base_url).await;
    let content = "  padded ünïcödé \"quoted\" & <tags>  ";

    session.set_draft(content);
    session.submit();
    session.settle().await;

    assert_eq!(contents(&session), vec![content]);
}

#[tokio::test]
async fn test_blank_submit_issues_no_request() {
    let (base_url, backend) = start_backend(&["existing"]).await;
    let mut session = loaded_session(&base_url).await;
    let requests_before = backend.lock().unwrap().requests.len();

    session.set_draft("   ");
    session.submit();
    session.settle().await;

    assert_eq!(backend.lock().unwrap().requests.len(), requests_before);
    assert_eq!(session.state().error(), EMPTY_DRAFT_ERROR);
    assert_eq!(contents(&session), vec!["existing"]);
}

#[tokio::test]
async fn test_double_send_posts_twice() {
    let (base_url, backend) = start_backend(&[]).await;
    let mut session = loaded_session(&base_url).await;

    session.set_draft("twice");
    session.submit();
    session.submit();
    session.settle().await;

    let posts = backend
        .lock()
        .unwrap()
        .requests
        .iter()
        .filter(|request| request.as_str() == "POST /api/messages")
        .count();
    assert_eq!(posts, 2);
    assert_eq!(contents(&session), vec!["twice", "twice"]);
    assert_eq!(session.state().draft(), "");
}

#[tokio::test]
async fn test_delete_removes_only_target() {
    let (base_url, _backend) = start_backend(&["keep one", "remove me", "keep two"]).await;
    let mut session = loaded_session(&base_url).await;

    let target = session
        .state()
        .messages()
        .iter()
        .find(|message| message.content == "remove me")
        .map(|message| message.id.clone())
        .unwrap();
    session.delete(target);
    session.settle().await;

    assert_eq!(contents(&session), vec!["keep two", "keep one"]);
    assert_eq!(session.state().error(), "");
}

#[tokio::test]
async fn test_delete_unknown_id_shows_server_body() {
    let (base_url, _backend) = start_backend(&["only"]).await;
    let mut session = loaded_session(&base_url).await;

    session.delete(MessageId::from(404));
    session.settle().await;

    assert_eq!(session.state().error(), "message not found");
    assert_eq!(contents(&session), vec!["only"]);
}

#[tokio::test]
async fn test_unhealthy_backend_shows_down() {
    let (base_url, backend) = start_backend(&["still listed"]).await;
    backend.lock().unwrap().unhealthy = true;
    let session = loaded_session(&base_url).await;

    assert_eq!(session.state().health(), HealthStatus::Down);
    assert_eq!(contents(&session), vec!["still listed"]);
    assert_eq!(session.state().error(), "");
}

#[tokio::test]
async fn test_unreachable_backend_recovers_locally() {
    // grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut session = loaded_session(&format!("http://{addr}")).await;
    assert_eq!(session.state().health(), HealthStatus::Down);
    assert!(session.state().messages().is_empty());
    assert!(!session.state().error().is_empty());

    session.set_draft("never saved");
    session.submit();
    session.settle().await;
    assert_eq!(session.state().draft(), "never saved");
    assert!(!session.state().error().is_empty());
}

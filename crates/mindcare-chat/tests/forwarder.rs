//! Forwarder tests against a local stub of the completion provider.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};

use mindcare_chat::error::ChatError;
use mindcare_chat::forwarder::{
    ChatForwarder, EMPTY_CONVERSATION_REPLY, FALLBACK_REPLY, ForwarderConfig, NO_TEXT_REPLY,
};
use mindcare_chat::prompt::{BASE_SYSTEM_PROMPT, ChatMessage, MILD_CONCERN_GUIDANCE};
use mindcare_core::models::chat_history::ChatRole;

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn spawn_provider(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/chat/completions")
}

fn forwarder(endpoint: String) -> ChatForwarder {
    ChatForwarder::new(ForwarderConfig {
        endpoint,
        api_key: Some("test-key".to_string()),
        ..ForwarderConfig::default()
    })
}

fn conversation(last_user: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: ChatRole::Assistant,
            content: "How are you feeling today?".to_string(),
        },
        ChatMessage {
            role: ChatRole::User,
            content: last_user.to_string(),
        },
    ]
}

async fn replying_provider(reply: Value) -> (String, Captured) {
    let captured = Captured::default();
    let router = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.requests.lock().unwrap().push((auth, body));
                        Json(reply)
                    }
                },
            ),
        )
        .with_state(captured.clone());
    (spawn_provider(router).await, captured)
}

#[tokio::test]
async fn returns_provider_text_verbatim() {
    let (endpoint, captured) =
        replying_provider(json!({"choices": [{"message": {"content": "Hey buddy! 👋"}}]})).await;

    let reply = forwarder(endpoint).reply(&conversation("hello")).await;
    assert_eq!(reply, "Hey buddy! 👋");

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], "openai/gpt-oss-20b");
    assert_eq!(body["max_tokens"], 800);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], BASE_SYSTEM_PROMPT);
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[2]["role"], "user");
    assert_eq!(messages[2]["content"], "hello");
}

#[tokio::test]
async fn system_prompt_reflects_mood() {
    let (endpoint, captured) =
        replying_provider(json!({"choices": [{"message": {"content": "I hear you."}}]})).await;

    forwarder(endpoint).reply(&conversation("so much stress")).await;

    let requests = captured.requests.lock().unwrap();
    let system = requests[0].1["messages"][0]["content"].as_str().unwrap();
    assert!(system.ends_with(MILD_CONCERN_GUIDANCE));
}

#[tokio::test]
async fn legacy_text_field_is_accepted() {
    let (endpoint, _) = replying_provider(json!({"choices": [{"text": "plain text"}]})).await;
    let reply = forwarder(endpoint).reply(&conversation("hi")).await;
    assert_eq!(reply, "plain text");
}

#[tokio::test]
async fn empty_choice_yields_no_text_reply() {
    let (endpoint, _) =
        replying_provider(json!({"choices": [{"message": {"content": ""}}]})).await;
    let reply = forwarder(endpoint).reply(&conversation("hi")).await;
    assert_eq!(reply, NO_TEXT_REPLY);
}

#[tokio::test]
async fn non_success_status_falls_back() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let endpoint = spawn_provider(router).await;
    let forwarder = forwarder(endpoint);

    let err = forwarder
        .complete("system", &conversation("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Provider { status: 500, .. }));

    assert_eq!(forwarder.reply(&conversation("hi")).await, FALLBACK_REPLY);
}

#[tokio::test]
async fn unparseable_body_falls_back() {
    let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
    let endpoint = spawn_provider(router).await;
    assert_eq!(
        forwarder(endpoint).reply(&conversation("hi")).await,
        FALLBACK_REPLY
    );
}

#[tokio::test]
async fn unreachable_provider_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let reply = forwarder(format!("http://{addr}/chat/completions"))
        .reply(&conversation("hi"))
        .await;
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn missing_api_key_falls_back_without_calling_out() {
    let (endpoint, captured) =
        replying_provider(json!({"choices": [{"message": {"content": "unused"}}]})).await;
    let forwarder = ChatForwarder::new(ForwarderConfig {
        endpoint,
        ..ForwarderConfig::default()
    });

    assert_eq!(forwarder.reply(&conversation("hi")).await, FALLBACK_REPLY);
    assert!(captured.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_conversation_gets_placeholder() {
    let forwarder = ChatForwarder::new(ForwarderConfig::default());
    assert_eq!(forwarder.reply(&[]).await, EMPTY_CONVERSATION_REPLY);
}

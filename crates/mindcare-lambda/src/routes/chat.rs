use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use mindcare_chat::forwarder::EMPTY_CONVERSATION_REPLY;
use mindcare_chat::prompt::ChatMessage;

use crate::state::AppState;

/// Accepted request shapes: `{"messages": [...]}` or a bare array of turns.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChatPayload {
    Wrapped { messages: Vec<ChatMessage> },
    Bare(Vec<ChatMessage>),
}

impl ChatPayload {
    fn into_messages(self) -> Vec<ChatMessage> {
        match self {
            ChatPayload::Wrapped { messages } | ChatPayload::Bare(messages) => messages,
        }
    }
}

#[derive(Serialize)]
pub struct ChatReply {
    text: String,
}

/// Answer the conversation. Always `200`; failures are reported through the
/// reply text.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Json<ChatReply> {
    let messages = match serde_json::from_slice::<ChatPayload>(&body) {
        Ok(payload) => payload.into_messages(),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable chat payload");
            return Json(ChatReply {
                text: EMPTY_CONVERSATION_REPLY.to_string(),
            });
        }
    };

    let text = state.forwarder.reply(&messages).await;
    Json(ChatReply { text })
}

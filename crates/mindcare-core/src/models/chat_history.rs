use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A persisted chat message.
///
/// Written once when the message is sent and never modified afterwards.
/// `owner_id` is either the identity provider's user id or a guest id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatHistoryMessage {
    pub id: Uuid,
    pub owner_id: String,
    pub role: ChatRole,
    pub content: String,
    pub created_at: jiff::Timestamp,
}

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::chat_history::{ChatHistoryMessage, ChatRole};
use mindcare_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default)]
    user_id: String,
}

/// Every message owned by `userId`, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatHistoryMessage>>, ApiError> {
    keys::validate_owner_id(&query.user_id)?;

    let prefix = keys::chat_messages_prefix(&query.user_id);
    let messages = documents::load_all(state.store.as_ref(), &prefix).await?;
    Ok(Json(messages))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMessageRequest {
    user_id: String,
    content: String,
    #[serde(default)]
    is_bot: bool,
}

#[derive(Serialize)]
pub struct SaveMessageResponse {
    success: bool,
    id: Uuid,
}

pub async fn save_message(
    State(state): State<AppState>,
    Json(req): Json<SaveMessageRequest>,
) -> Result<(StatusCode, Json<SaveMessageResponse>), ApiError> {
    keys::validate_owner_id(&req.user_id)?;
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("message content is empty".to_string()));
    }

    let message = ChatHistoryMessage {
        id: Uuid::new_v4(),
        owner_id: req.user_id,
        role: if req.is_bot {
            ChatRole::Assistant
        } else {
            ChatRole::User
        },
        content: req.content,
        created_at: jiff::Timestamp::now(),
    };

    let key = keys::chat_message(&message.owner_id, message.created_at, message.id);
    documents::save(state.store.as_ref(), &key, &message).await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveMessageResponse {
            success: true,
            id: message.id,
        }),
    ))
}

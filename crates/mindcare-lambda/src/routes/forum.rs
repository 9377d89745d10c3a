use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::forum::{ANONYMOUS_AUTHOR, ForumPost};
use mindcare_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usage;

const NEW_POST_TAG: &str = "New";

/// All posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<ForumPost>>, ApiError> {
    let mut posts: Vec<ForumPost> =
        documents::load_all(state.store.as_ref(), keys::FORUM_PREFIX).await?;
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(posts))
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    content: String,
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ForumPost>), ApiError> {
    let content = req.content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest("post content is empty".to_string()));
    }

    let post = ForumPost {
        id: Uuid::new_v4(),
        author: ANONYMOUS_AUTHOR.to_string(),
        content: content.to_string(),
        tags: vec![NEW_POST_TAG.to_string()],
        likes: 0,
        replies: 0,
        created_at: jiff::Timestamp::now(),
    };

    let store = state.store.as_ref();
    documents::save(store, &keys::forum_post(post.id), &post).await?;
    usage::update_metrics(store, |m| m.forum_posts += 1).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ForumPost>, ApiError> {
    let store = state.store.as_ref();
    let key = keys::forum_post(id);

    let mut post: ForumPost = documents::load_required(store, &key).await?;
    post.likes += 1;
    documents::save(store, &key, &post).await?;

    Ok(Json(post))
}

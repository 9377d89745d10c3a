use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous Student";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ForumPost {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub replies: u32,
    pub created_at: jiff::Timestamp,
}

//! Document-store key conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of JSON documents in the MindCare bucket.

use uuid::Uuid;

use crate::error::CoreError;

pub const MESSAGES_PREFIX: &str = "messages/";

/// Prefix holding every chat message owned by `owner_id`.
pub fn chat_messages_prefix(owner_id: &str) -> String {
    format!("{MESSAGES_PREFIX}{owner_id}/")
}

/// Key of a single chat message.
///
/// The millisecond timestamp is zero-padded so that a lexicographic listing
/// of the owner's prefix is also creation order.
pub fn chat_message(owner_id: &str, created_at: jiff::Timestamp, id: Uuid) -> String {
    format!(
        "{MESSAGES_PREFIX}{owner_id}/{:015}-{id}.json",
        created_at.as_millisecond().max(0)
    )
}

pub const STUDENTS_PREFIX: &str = "students/";

pub fn student(id: Uuid) -> String {
    format!("{STUDENTS_PREFIX}{id}.json")
}

pub const BOOKINGS_PREFIX: &str = "bookings/";

pub fn booking(id: Uuid) -> String {
    format!("{BOOKINGS_PREFIX}{id}.json")
}

pub const FORUM_PREFIX: &str = "forum/";

pub fn forum_post(id: Uuid) -> String {
    format!("{FORUM_PREFIX}{id}.json")
}

pub const USAGE_METRICS: &str = "_state/metrics.json";

/// Owner ids end up inside object keys, so only a conservative alphabet is
/// accepted: ASCII alphanumerics, `_` and `-`, at most 128 characters.
pub fn validate_owner_id(owner_id: &str) -> Result<(), CoreError> {
    let valid = !owner_id.is_empty()
        && owner_id.len() <= 128
        && owner_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidOwnerId(owner_id.to_string()))
    }
}

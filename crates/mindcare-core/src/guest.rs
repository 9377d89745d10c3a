//! Guest identifiers for visitors who have not signed in.

use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random base-36 characters in a guest id suffix.
pub const GUEST_SUFFIX_LEN: usize = 9;

pub const GUEST_PREFIX: &str = "guest_";

/// Generate a guest id of the form `guest_<unix-millis>_<9 base-36 chars>`.
pub fn new_guest_id(now: jiff::Timestamp) -> String {
    let mut random = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(GUEST_SUFFIX_LEN);
    for _ in 0..GUEST_SUFFIX_LEN {
        suffix.push(BASE36[(random % 36) as usize] as char);
        random /= 36;
    }
    format!("{GUEST_PREFIX}{}_{suffix}", now.as_millisecond())
}

pub fn is_guest_id(id: &str) -> bool {
    id.starts_with(GUEST_PREFIX)
}

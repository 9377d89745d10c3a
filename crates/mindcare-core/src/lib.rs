//! mindcare-core
//!
//! Pure domain types and document-store key conventions.
//! No AWS or HTTP dependency; this is the shared vocabulary of the MindCare
//! backend and the source of the front end's TypeScript bindings.

pub mod error;
pub mod guest;
pub mod keys;
pub mod models;

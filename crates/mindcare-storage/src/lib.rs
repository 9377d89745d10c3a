//! mindcare-storage
//!
//! JSON document persistence. S3 in production, an in-memory map for tests
//! and local runs; both behind [`store::DocumentStore`].

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod store;

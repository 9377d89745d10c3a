//! mindcare-chat
//!
//! Chat assistant: mood triage of the latest user message, system-prompt
//! assembly, and forwarding of the conversation to an OpenAI-compatible
//! chat-completion endpoint.

pub mod error;
pub mod forwarder;
pub mod mood;
pub mod prompt;

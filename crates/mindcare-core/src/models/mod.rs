pub mod booking;
pub mod chat_history;
pub mod forum;
pub mod metrics;
pub mod student;

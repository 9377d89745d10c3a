pub mod admin;
pub mod assessments;
pub mod bookings;
pub mod chat;
pub mod events;
pub mod forum;
pub mod guests;
pub mod health;
pub mod history;
pub mod instruments;

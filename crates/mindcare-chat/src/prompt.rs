//! System prompt assembly.
//!
//! The base persona is always present; the mood of the latest user message
//! selects which extra guidance (if any) is appended.

use mindcare_core::models::chat_history::ChatRole;
use serde::{Deserialize, Serialize};

use crate::mood::{Mood, analyze_mood};

pub const BASE_SYSTEM_PROMPT: &str = "You are a friendly, casual chatbot buddy.
- Reply in the same language as user (Hindi/English mix allowed)
- Keep tone natural, human-like, supportive
- Use emojis sometimes
- Short replies for greetings, longer for deep talks";

pub const CONCERN_GUIDANCE: &str = "
- The user seems seriously stressed, anxious, or depressed.
- Start with empathetic talk.
- After conversation, you may suggest PHQ-9 or GAD-7 test if needed.";

pub const MILD_CONCERN_GUIDANCE: &str = "
- User seems slightly stressed or sad.
- Just empathize, do not suggest any test yet.";

/// A single turn of the conversation as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Content of the last `user` turn, or `""` when the user has not spoken.
pub fn last_user_utterance(messages: &[ChatMessage]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.as_str())
        .unwrap_or("")
}

pub fn build_system_prompt(mood: Mood) -> String {
    let mut prompt = String::from(BASE_SYSTEM_PROMPT);
    match mood {
        Mood::Concern => prompt.push_str(CONCERN_GUIDANCE),
        Mood::MildConcern => prompt.push_str(MILD_CONCERN_GUIDANCE),
        Mood::NoConcern => {}
    }
    prompt
}

/// Triage the conversation and return the mood together with the system
/// prompt it selects.
pub fn system_prompt_for(messages: &[ChatMessage]) -> (Mood, String) {
    let mood = analyze_mood(last_user_utterance(messages));
    (mood, build_system_prompt(mood))
}

//! Chat completion forwarding.
//!
//! One conversation in, one reply out. The forwarder prepends the assembled
//! system prompt to the client's turns and sends everything to an
//! OpenAI-compatible `/chat/completions` endpoint (OpenRouter by default) in
//! a single POST. There is no retry, streaming or custom timeout: a failed
//! call is logged and answered with [`FALLBACK_REPLY`].

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mindcare_core::models::chat_history::ChatRole;

use crate::error::ChatError;
use crate::prompt::{ChatMessage, system_prompt_for};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Reply for an empty or unreadable conversation payload.
pub const EMPTY_CONVERSATION_REPLY: &str = "Kya bolta bhidu? 😄";
/// Reply when the provider call fails for any reason.
pub const FALLBACK_REPLY: &str = "Kuch gadbad ho gayi re bhai 😅";
/// Reply when the provider answered but produced no text.
pub const NO_TEXT_REPLY: &str = "Arre bhidu, reply nahi ban paya 😅";

#[derive(Debug, Clone)]
pub struct ForwarderConfig {
    pub endpoint: String,
    pub model: String,
    /// Bearer credential. Without one every call falls back.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 800,
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

// ── Forwarder ────────────────────────────────────────────────────────────────

/// Stateless client for the completion provider. Cheap to clone; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ChatForwarder {
    http: reqwest::Client,
    config: ForwarderConfig,
}

impl ChatForwarder {
    pub fn new(config: ForwarderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Triage the conversation, forward it, and return the reply text.
    ///
    /// Never fails: an empty conversation gets [`EMPTY_CONVERSATION_REPLY`]
    /// and any provider error gets [`FALLBACK_REPLY`].
    pub async fn reply(&self, messages: &[ChatMessage]) -> String {
        if messages.is_empty() {
            return EMPTY_CONVERSATION_REPLY.to_string();
        }

        let (mood, system_prompt) = system_prompt_for(messages);
        info!(?mood, turns = messages.len(), "forwarding chat");

        match self.complete(&system_prompt, messages).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_TEXT_REPLY.to_string(),
            Err(e) => {
                warn!(error = %e, "chat completion failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Send `system_prompt` followed by `messages` to the provider.
    ///
    /// Returns `Ok(None)` when the provider answered successfully but with
    /// no usable text.
    pub async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, ChatError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ChatError::MissingApiKey)?;

        let mut wire_messages = Vec::with_capacity(messages.len() + 1);
        wire_messages.push(WireMessage {
            role: "system",
            content: system_prompt,
        });
        wire_messages.extend(messages.iter().map(|m| WireMessage {
            role: wire_role(m.role),
            content: &m.content,
        }));

        let body = CompletionRequest {
            model: &self.config.model,
            messages: wire_messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: CompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ChatError::ResponseParse(e.to_string()))?;

        Ok(extract_text(parsed))
    }
}

/// First non-empty of `choices[0].message.content` and `choices[0].text`.
fn extract_text(response: CompletionResponse) -> Option<String> {
    let choice = response.choices.into_iter().next()?;
    choice
        .message
        .and_then(|m| m.content)
        .filter(|t| !t.is_empty())
        .or(choice.text.filter(|t| !t.is_empty()))
}

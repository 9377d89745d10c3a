use mindcare_chat::mood::Mood;
use mindcare_chat::prompt::{
    BASE_SYSTEM_PROMPT, CONCERN_GUIDANCE, ChatMessage, MILD_CONCERN_GUIDANCE,
    build_system_prompt, last_user_utterance, system_prompt_for,
};
use mindcare_core::models::chat_history::ChatRole;

fn turn(role: ChatRole, content: &str) -> ChatMessage {
    ChatMessage {
        role,
        content: content.to_string(),
    }
}

#[test]
fn base_prompt_only_without_concern() {
    assert_eq!(build_system_prompt(Mood::NoConcern), BASE_SYSTEM_PROMPT);
}

#[test]
fn guidance_appended_per_mood() {
    let concern = build_system_prompt(Mood::Concern);
    assert!(concern.starts_with(BASE_SYSTEM_PROMPT));
    assert!(concern.ends_with(CONCERN_GUIDANCE));
    assert!(concern.contains("PHQ-9 or GAD-7"));

    let mild = build_system_prompt(Mood::MildConcern);
    assert!(mild.ends_with(MILD_CONCERN_GUIDANCE));
    assert!(!mild.contains("PHQ-9"));
}

#[test]
fn last_user_turn_wins() {
    let messages = vec![
        turn(ChatRole::User, "first"),
        turn(ChatRole::Assistant, "reply"),
        turn(ChatRole::User, "second"),
        turn(ChatRole::Assistant, "another reply"),
    ];
    assert_eq!(last_user_utterance(&messages), "second");
}

#[test]
fn no_user_turn_means_empty_utterance() {
    let messages = vec![turn(ChatRole::Assistant, "I'm so stressed, says the bot")];
    assert_eq!(last_user_utterance(&messages), "");
    let (mood, prompt) = system_prompt_for(&messages);
    assert_eq!(mood, Mood::NoConcern);
    assert_eq!(prompt, BASE_SYSTEM_PROMPT);
}

#[test]
fn triage_uses_only_latest_user_turn() {
    let messages = vec![
        turn(
            ChatRole::User,
            "I have been really depressed for weeks and cannot focus",
        ),
        turn(ChatRole::Assistant, "That sounds hard."),
        turn(ChatRole::User, "ok thanks"),
    ];
    let (mood, _) = system_prompt_for(&messages);
    assert_eq!(mood, Mood::NoConcern);
}

#[test]
fn client_payload_deserializes() {
    let messages: Vec<ChatMessage> = serde_json::from_str(
        r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#,
    )
    .unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, ChatRole::Assistant);
}

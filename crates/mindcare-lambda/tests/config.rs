use std::collections::HashMap;

use mindcare_chat::forwarder::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use mindcare_lambda::config::{Config, StoreBackend};

fn config(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(
        config.store,
        StoreBackend::S3 {
            bucket: "mindcare".to_string(),
            endpoint: None,
        }
    );
    assert_eq!(config.chat.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.chat.model, DEFAULT_MODEL);
    assert!(config.chat.api_key.is_none());
    assert_eq!(config.chat.max_tokens, 800);
    assert_eq!(config.port, 3000);
    assert!(config.auth.build_verifier().unwrap().is_none());
}

#[test]
fn overrides() {
    let config = config(&[
        ("MINDCARE_STORE", "memory"),
        ("OPENROUTER_API_KEY", "sk-test"),
        ("MINDCARE_CHAT_MODEL", "meta/llama"),
        ("MINDCARE_CHAT_MAX_TOKENS", "256"),
        ("AUTH_JWT_SECRET", "dev"),
        ("PORT", "8080"),
    ])
    .unwrap();
    assert_eq!(config.store, StoreBackend::Memory);
    assert_eq!(config.chat.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.chat.model, "meta/llama");
    assert_eq!(config.chat.max_tokens, 256);
    assert_eq!(config.port, 8080);
    assert!(config.auth.build_verifier().unwrap().is_some());
}

#[test]
fn blank_values_count_as_unset() {
    let config = config(&[("OPENROUTER_API_KEY", "  "), ("MINDCARE_BUCKET", "")]).unwrap();
    assert!(config.chat.api_key.is_none());
    assert!(matches!(config.store, StoreBackend::S3 { bucket, .. } if bucket == "mindcare"));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(config(&[("MINDCARE_STORE", "dynamo")]).is_err());
    assert!(config(&[("PORT", "eighty")]).is_err());
    assert!(config(&[("AUTH_JWT_PUBLIC_KEY_PEM", "not a pem")])
        .unwrap()
        .auth
        .build_verifier()
        .is_err());
}

//! Startup configuration, read once from the environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

use mindcare_auth::jwt::TokenVerifier;
use mindcare_chat::forwarder::{DEFAULT_ENDPOINT, DEFAULT_MODEL, ForwarderConfig};

/// Where documents are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    S3 {
        bucket: String,
        /// Custom S3-compatible endpoint, e.g. a local MinIO.
        endpoint: Option<String>,
    },
    /// Process-local map; everything is lost on restart.
    Memory,
}

#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub public_key_pem: Option<String>,
    pub secret: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Build the token verifier. The RS256 public key takes precedence over
    /// the HS256 secret. `None` when neither is configured, in which case
    /// every protected route answers 401.
    pub fn build_verifier(&self) -> eyre::Result<Option<TokenVerifier>> {
        let issuer = self.issuer.as_deref();
        let audience = self.audience.as_deref();

        if let Some(pem) = &self.public_key_pem {
            let verifier = TokenVerifier::from_rsa_pem(pem.as_bytes(), issuer, audience)?;
            return Ok(Some(verifier));
        }
        if let Some(secret) = &self.secret {
            return Ok(Some(TokenVerifier::from_secret(
                secret.as_bytes(),
                issuer,
                audience,
            )));
        }

        warn!("no JWT verification key configured, protected routes will reject all requests");
        Ok(None)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub chat: ForwarderConfig,
    pub auth: AuthConfig,
    /// Listen port when running outside Lambda.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| {
            var(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let store = match or_default("MINDCARE_STORE", "s3").as_str() {
            "s3" => StoreBackend::S3 {
                bucket: or_default("MINDCARE_BUCKET", "mindcare"),
                endpoint: var("MINDCARE_S3_ENDPOINT"),
            },
            "memory" => StoreBackend::Memory,
            other => eyre::bail!("MINDCARE_STORE must be 's3' or 'memory', got '{other}'"),
        };

        let api_key = var("OPENROUTER_API_KEY");
        if api_key.is_none() {
            warn!("OPENROUTER_API_KEY not set, chat replies will use the fallback text");
        }

        let temperature = or_default("MINDCARE_CHAT_TEMPERATURE", "0.7");
        let max_tokens = or_default("MINDCARE_CHAT_MAX_TOKENS", "800");
        let chat = ForwarderConfig {
            endpoint: or_default("MINDCARE_CHAT_ENDPOINT", DEFAULT_ENDPOINT),
            model: or_default("MINDCARE_CHAT_MODEL", DEFAULT_MODEL),
            api_key,
            temperature: parse(&temperature, "MINDCARE_CHAT_TEMPERATURE")?,
            max_tokens: parse(&max_tokens, "MINDCARE_CHAT_MAX_TOKENS")?,
        };

        let auth = AuthConfig {
            public_key_pem: var("AUTH_JWT_PUBLIC_KEY_PEM"),
            secret: var("AUTH_JWT_SECRET"),
            issuer: var("AUTH_JWT_ISSUER"),
            audience: var("AUTH_JWT_AUDIENCE"),
        };

        let port = parse(&or_default("PORT", "3000"), "PORT")?;

        Ok(Self {
            store,
            chat,
            auth,
            port,
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> eyre::Result<T>
where
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| eyre::eyre!("invalid {key} value '{value}': {e}"))
}

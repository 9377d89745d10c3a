use std::sync::Arc;

use mindcare_auth::jwt::TokenVerifier;
use mindcare_chat::forwarder::ChatForwarder;
use mindcare_storage::client;
use mindcare_storage::memory::MemoryStore;
use mindcare_storage::store::{S3Store, SharedStore};

use crate::config::{Config, StoreBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub forwarder: ChatForwarder,
    /// `None` when no verification key is configured.
    pub verifier: Option<TokenVerifier>,
}

impl AppState {
    pub fn new(
        store: SharedStore,
        forwarder: ChatForwarder,
        verifier: Option<TokenVerifier>,
    ) -> Self {
        Self {
            store,
            forwarder,
            verifier,
        }
    }

    pub async fn from_config(config: &Config) -> eyre::Result<Self> {
        let store: SharedStore = match &config.store {
            StoreBackend::S3 { bucket, endpoint } => {
                let s3 = match endpoint {
                    Some(url) => client::build_client_with_endpoint(url).await,
                    None => client::build_client().await,
                };
                tracing::info!(bucket = %bucket, "using S3 document store");
                Arc::new(S3Store::new(s3, bucket.clone()))
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory document store, data will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        let verifier = config.auth.build_verifier()?;

        Ok(Self::new(
            store,
            ChatForwarder::new(config.chat.clone()),
            verifier,
        ))
    }
}

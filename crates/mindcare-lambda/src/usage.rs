//! Read-modify-write access to the usage metrics document.

use mindcare_core::keys;
use mindcare_core::models::metrics::UsageMetrics;
use mindcare_storage::documents;
use mindcare_storage::error::StorageError;
use mindcare_storage::store::DocumentStore;

/// Current counters; all zero before the first write.
pub async fn load_metrics(store: &dyn DocumentStore) -> Result<UsageMetrics, StorageError> {
    Ok(documents::load(store, keys::USAGE_METRICS)
        .await?
        .unwrap_or_default())
}

/// Apply `update` to the stored counters and write them back.
///
/// Not atomic: two concurrent updates may lose one increment.
pub async fn update_metrics(
    store: &dyn DocumentStore,
    update: impl FnOnce(&mut UsageMetrics),
) -> Result<UsageMetrics, StorageError> {
    let mut metrics = load_metrics(store).await?;
    update(&mut metrics);
    documents::save(store, keys::USAGE_METRICS, &metrics).await?;
    Ok(metrics)
}

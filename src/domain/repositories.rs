use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::guides::Guide;
use crate::domain::keys::CacheKey;

/// Whole-document key-value storage for assembled guides.
///
/// One record per key, last-writer-wins. Concurrent requests for the same
/// never-cached key may each produce and write a guide; the second write
/// wins and no reconciliation is attempted.
#[async_trait]
pub trait GuideStore: Send + Sync {
    /// True iff a record for `key` is durably present.
    async fn exists(&self, key: &CacheKey) -> Result<bool, StoreError>;

    /// Read the guide stored under `key`.
    async fn get(&self, key: &CacheKey) -> Result<Guide, StoreError>;

    /// Durably write `guide` under `key`, creating the backing storage
    /// location on first use. Overwrites any prior record for the same key.
    async fn put(&self, key: &CacheKey, guide: &Guide) -> Result<(), StoreError>;
}

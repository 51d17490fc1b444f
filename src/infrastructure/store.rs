use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::guides::Guide;
use crate::domain::keys::CacheKey;
use crate::domain::repositories::GuideStore;

/// Guide storage as one pretty-printed JSON document per key under a single
/// directory. The directory is created on first write.
pub struct FileGuideStore {
    root: PathBuf,
}

impl FileGuideStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl GuideStore for FileGuideStore {
    async fn exists(&self, key: &CacheKey) -> Result<bool, StoreError> {
        Ok(tokio::fs::try_exists(self.path_for(key)).await?)
    }

    async fn get(&self, key: &CacheKey) -> Result<Guide, StoreError> {
        let raw = match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(err) => return Err(StoreError::Io(err)),
        };

        serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt(err.to_string()))
    }

    async fn put(&self, key: &CacheKey, guide: &Guide) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let json = serde_json::to_vec_pretty(guide).map_err(io::Error::other)?;
        tokio::fs::write(self.path_for(key), json).await?;

        Ok(())
    }
}

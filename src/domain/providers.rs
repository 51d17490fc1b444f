use async_trait::async_trait;

use crate::domain::errors::ProviderError;
use crate::domain::guides::NewAttraction;

/// Text-generation capability: produce an ordered attraction list for a city
/// in the requested flavor. Called once per cache miss, no retry.
#[async_trait]
pub trait AttractionGenerator: Send + Sync {
    async fn generate(&self, city: &str, flavor: &str)
    -> Result<Vec<NewAttraction>, ProviderError>;
}

/// Image-search capability: find a representative image URL for a free-text
/// query. `None` means the search succeeded but had no usable result.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn find_image(&self, query: &str) -> Result<Option<String>, ProviderError>;
}

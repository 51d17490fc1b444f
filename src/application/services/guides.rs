use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use tracing::info;

use crate::application::errors::AppError;
use crate::domain::errors::ProviderError;
use crate::domain::guides::{Attraction, Guide, GuideMetadata, GuideQuery, NewAttraction};
use crate::domain::keys::CacheKey;
use crate::domain::providers::{AttractionGenerator, ImageProvider};
use crate::domain::repositories::GuideStore;

/// Assembles guides: cache lookup, generation, concurrent image enrichment,
/// metadata stamping, persistence.
#[derive(Clone)]
pub struct GuideService {
    store: Arc<dyn GuideStore>,
    generator: Arc<dyn AttractionGenerator>,
    images: Arc<dyn ImageProvider>,
}

impl GuideService {
    pub fn new(
        store: Arc<dyn GuideStore>,
        generator: Arc<dyn AttractionGenerator>,
        images: Arc<dyn ImageProvider>,
    ) -> Self {
        Self {
            store,
            generator,
            images,
        }
    }

    /// Return the guide for `query`, serving from the store when a record
    /// exists and otherwise generating, enriching, and persisting a fresh one.
    ///
    /// Any failure between generation and persistence aborts the request;
    /// a partial guide is never persisted or returned, so a later retry
    /// re-invokes generation from scratch.
    #[tracing::instrument(skip_all, fields(city = %query.city, flavor = %query.flavor))]
    pub async fn guide_for(&self, query: &GuideQuery) -> Result<Guide, AppError> {
        let key = CacheKey::derive(&query.city, &query.flavor);

        if self.store.exists(&key).await? {
            info!(key = %key, "serving cached guide");
            return Ok(self.store.get(&key).await?);
        }

        let drafts = self.generator.generate(&query.city, &query.flavor).await?;
        info!(key = %key, count = drafts.len(), "generated attractions, resolving images");

        let attractions = self.enrich(drafts, &query.city).await?;
        let header_image = self.images.find_image(&query.city).await?;

        let guide = Guide {
            metadata: GuideMetadata {
                city: query.city.clone(),
                flavor: query.flavor.clone(),
                created_at: Utc::now(),
                header_image,
            },
            attractions,
        };

        self.store.put(&key, &guide).await?;
        info!(key = %key, "persisted new guide");

        Ok(guide)
    }

    /// Resolve an image for every attraction concurrently. Results join back
    /// in the original attraction order; the first lookup failure fails the
    /// whole batch.
    async fn enrich(
        &self,
        drafts: Vec<NewAttraction>,
        city: &str,
    ) -> Result<Vec<Attraction>, ProviderError> {
        let lookups = drafts.into_iter().map(|draft| {
            let images = Arc::clone(&self.images);
            let query = format!("{} {city}", draft.name);
            async move {
                let image = images.find_image(&query).await?;
                Ok::<Attraction, ProviderError>(draft.with_image(image))
            }
        });

        try_join_all(lookups).await
    }
}

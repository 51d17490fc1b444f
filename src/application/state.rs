use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::GuideService;
use crate::domain::providers::{AttractionGenerator, ImageProvider};
use crate::domain::repositories::GuideStore;
use crate::infrastructure::ai::OpenRouterGenerator;
use crate::infrastructure::images::WikipediaImageSearch;
use crate::infrastructure::store::FileGuideStore;

/// Configuration for external services — everything that varies between
/// production and test environments. The store and both capability clients
/// are created automatically from it.
pub struct AppStateConfig {
    pub guides_dir: PathBuf,
    pub openrouter_url: String,
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub image_search_url: String,
}

#[derive(Clone)]
pub struct AppState {
    pub guide_service: GuideService,
}

impl AppState {
    pub fn from_config(config: AppStateConfig) -> Self {
        #[allow(clippy::expect_used)]
        let http_client = reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let store: Arc<dyn GuideStore> = Arc::new(FileGuideStore::new(config.guides_dir));
        let generator: Arc<dyn AttractionGenerator> = Arc::new(OpenRouterGenerator::new(
            http_client.clone(),
            config.openrouter_url,
            config.openrouter_api_key,
            config.openrouter_model,
        ));
        let images: Arc<dyn ImageProvider> =
            Arc::new(WikipediaImageSearch::new(http_client, config.image_search_url));

        Self {
            guide_service: GuideService::new(store, generator, images),
        }
    }
}

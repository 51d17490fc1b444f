use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated request input: both fields trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct GuideQuery {
    pub city: String,
    pub flavor: String,
}

/// An attraction as produced by the generator, before image enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttraction {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewAttraction {
    pub fn with_image(self, image: Option<String>) -> Attraction {
        Attraction {
            name: self.name,
            description: self.description,
            tags: self.tags,
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideMetadata {
    pub city: String,
    pub flavor: String,
    pub created_at: DateTime<Utc>,
    pub header_image: Option<String>,
}

/// The persisted, user-facing document for one `(city, flavor)` pair.
/// Assembled in memory, written once, then only ever read back by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    pub metadata: GuideMetadata,
    pub attractions: Vec<Attraction>,
}

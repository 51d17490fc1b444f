use thiserror::Error;

/// Failures raised by a [`GuideStore`](crate::domain::repositories::GuideStore).
///
/// A missing record is not a pipeline failure: the assembler treats
/// [`StoreError::NotFound`] as a cache miss and generates a fresh guide.
/// A record that is present but unreadable is a server-side fault and is
/// reported distinctly from a miss.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("guide not found")]
    NotFound,

    #[error("stored guide is unreadable: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures raised by the external text-generation and image-search
/// capabilities. Neither is retried; an error aborts the whole request.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream returned an unexpected response: {0}")]
    Malformed(String),
}

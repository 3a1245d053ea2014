use async_trait::async_trait;
use emojisearch_common::Result;

/// Capability interface for embedding providers
///
/// Maps a string to a fixed-length dense vector. Implementations must be
/// deterministic for identical input and model version so that search
/// results are reproducible.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

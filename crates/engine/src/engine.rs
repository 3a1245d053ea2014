use emojisearch_common::{AppConfig, EmojiSearchError, Result};
use emojisearch_embedding::EmbeddingProvider;
use ndarray::ArrayView1;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::catalog::{build_catalog, load_catalog, CatalogEntry};
use crate::index::VectorIndex;
use crate::normalize::normalize;

/// Best-matching emoji for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Emoji character
    pub symbol: String,

    /// Normalized catalog description
    pub description: String,

    /// Cosine similarity score
    pub score: f32,
}

/// Semantic emoji search engine
///
/// Holds the catalog and its vector index, both immutable after
/// construction. Safe to share across concurrent queries without locking.
pub struct SearchEngine {
    entries: Vec<CatalogEntry>,
    index: VectorIndex,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SearchEngine {
    /// Build an engine from already-loaded catalog entries
    pub async fn build(
        entries: Vec<CatalogEntry>,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(EmojiSearchError::catalog(
                "Cannot build an engine over an empty catalog",
            ));
        }

        let index = VectorIndex::build(&entries, provider.as_ref()).await?;

        Ok(Self {
            entries,
            index,
            provider,
        })
    }

    /// Number of searchable catalog entries
    pub fn catalog_size(&self) -> usize {
        self.index.size()
    }

    /// Embedding dimension of the index
    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    /// Find the single best-matching emoji for a free-text query
    pub async fn search(&self, query: &str) -> Result<QueryResult> {
        let normalized = normalize(query);
        if normalized.trim().is_empty() {
            return Err(EmojiSearchError::EmptyQuery);
        }

        let start = Instant::now();
        let query_embedding = self.provider.embed(&normalized).await?;
        debug!("Encoding query took {:?}", start.elapsed());

        // A mis-sized query vector must fail this request, not the process
        if query_embedding.len() != self.index.dimension() {
            return Err(EmojiSearchError::embedding(format!(
                "Query embedding dimension {} does not match index dimension {}",
                query_embedding.len(),
                self.index.dimension()
            )));
        }

        let start = Instant::now();
        let query_view = ArrayView1::from(query_embedding.as_slice());
        let ranked = self.index.rank(query_view);
        debug!("Similarity ranking took {:?}", start.elapsed());

        // rank() always returns N >= 1 pairs
        let (best_idx, best_score) = ranked[0];
        let entry = &self.entries[best_idx];

        Ok(QueryResult {
            symbol: entry.symbol.clone(),
            description: entry.description.clone(),
            score: best_score,
        })
    }
}

/// Build a ready-to-serve engine from configuration
///
/// Fails fast: any catalog or index construction error aborts startup and
/// no partially built engine is ever exposed.
pub async fn initialize(
    config: &AppConfig,
    provider: Arc<dyn EmbeddingProvider>,
) -> Result<SearchEngine> {
    let records = load_catalog(&config.catalog_path)?;
    let entries = build_catalog(&records)?;

    let engine = SearchEngine::build(entries, provider).await?;
    info!(
        "Search engine ready: {} entries, dimension {}",
        engine.catalog_size(),
        engine.dimension()
    );

    Ok(engine)
}

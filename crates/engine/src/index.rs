use emojisearch_common::{EmojiSearchError, Result};
use emojisearch_embedding::EmbeddingProvider;
use ndarray::{Array2, ArrayView1};
use tracing::{debug, info};

use crate::catalog::CatalogEntry;
use crate::similarity::cosine_similarity;

/// Immutable matrix of catalog embeddings
///
/// Row i holds the embedding of catalog entry i. Built once at startup and
/// shared read-only across concurrent queries.
#[derive(Debug)]
pub struct VectorIndex {
    vectors: Array2<f32>,
}

impl VectorIndex {
    /// Build the index by embedding each entry's description in order
    pub async fn build(
        entries: &[CatalogEntry],
        provider: &dyn EmbeddingProvider,
    ) -> Result<Self> {
        let mut vectors = Vec::with_capacity(entries.len());

        for entry in entries {
            let embedding = provider.embed(&entry.description).await?;
            vectors.push(embedding);
        }

        let index = Self::from_vectors(vectors)?;
        info!(
            "Built vector index: {} entries, dimension {}",
            index.size(),
            index.dimension()
        );
        Ok(index)
    }

    /// Build the index from precomputed vectors
    ///
    /// Fails if the vectors are empty or do not all share one dimension.
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let rows = vectors.len();
        if rows == 0 {
            return Err(EmojiSearchError::embedding(
                "Cannot build an index from zero vectors",
            ));
        }

        let dim = vectors[0].len();
        if dim == 0 {
            return Err(EmojiSearchError::embedding(
                "Embedding provider returned a zero-length vector",
            ));
        }

        let mut flat = Vec::with_capacity(rows * dim);
        for (i, vector) in vectors.into_iter().enumerate() {
            if vector.len() != dim {
                return Err(EmojiSearchError::embedding(format!(
                    "Inconsistent embedding dimension at row {}: expected {}, got {}",
                    i,
                    dim,
                    vector.len()
                )));
            }
            flat.extend(vector);
        }

        let vectors = Array2::from_shape_vec((rows, dim), flat)
            .map_err(|e| EmojiSearchError::internal(format!("Index shape error: {}", e)))?;

        Ok(Self { vectors })
    }

    /// Embedding dimension D
    pub fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    /// Number of indexed entries N
    pub fn size(&self) -> usize {
        self.vectors.nrows()
    }

    /// Rank every row against the query vector
    ///
    /// Returns all N (index, score) pairs sorted by descending cosine
    /// similarity. The sort is stable, so rows with exactly equal scores
    /// keep their catalog order and the earliest entry wins a tie.
    pub fn rank(&self, query: ArrayView1<'_, f32>) -> Vec<(usize, f32)> {
        let mut results: Vec<(usize, f32)> = self
            .vectors
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i, cosine_similarity(query, row)))
            .collect();

        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!("Ranked {} candidates", results.len());
        results
    }
}

//! EmojiSearch Engine
//!
//! Embedding-based nearest-neighbor search over a static emoji catalog.
//! The catalog and vector index are built once at startup and are immutable
//! afterwards, so queries run lock-free against shared state.

mod catalog;
mod engine;
mod index;
mod normalize;
mod similarity;

pub use catalog::{build_catalog, load_catalog, CatalogEntry, RawEmojiRecord};
pub use engine::{initialize, QueryResult, SearchEngine};
pub use index::VectorIndex;
pub use normalize::normalize;
pub use similarity::cosine_similarity;

//! EmojiSearch Embedding Provider
//!
//! Capability trait for text embedding and the Ollama API client

mod client;
mod provider;
mod types;

pub use client::OllamaClient;
pub use provider::EmbeddingProvider;
pub use types::{EmbedRequest, EmbedResponse};

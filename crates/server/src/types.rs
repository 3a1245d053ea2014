use serde::{Deserialize, Serialize};

/// Query string parameters for GET /search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text query
    #[serde(default)]
    pub query: String,
}

/// Successful search response body
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Best-matching emoji character
    pub emoji: String,

    /// Normalized catalog description
    pub description: String,

    /// Cosine similarity score
    pub score: f32,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// EmojiSearch error types
#[derive(Debug, thiserror::Error)]
pub enum EmojiSearchError {
    /// Catalog source unreachable or unparseable at startup
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Embedding provider failed or returned inconsistent dimensions
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// Query string is empty after normalization
    #[error("Query is empty after normalization")]
    EmptyQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmojiSearchError {
    /// Create catalog error
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    /// Create embedding error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::EmbeddingUnavailable(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (consumed by the actix-web layer)
impl EmojiSearchError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyQuery => 400,
            Self::InvalidInput(_) => 400,
            Self::EmbeddingUnavailable(_) => 503,
            Self::CatalogUnavailable(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(EmojiSearchError::EmptyQuery.status_code(), 400);
        assert_eq!(EmojiSearchError::embedding("down").status_code(), 503);
        assert_eq!(EmojiSearchError::catalog("missing").status_code(), 500);
        assert_eq!(EmojiSearchError::invalid_input("bad").status_code(), 400);
    }

    #[test]
    fn test_error_display() {
        let err = EmojiSearchError::catalog("file not found");
        assert_eq!(err.to_string(), "Catalog unavailable: file not found");
    }
}

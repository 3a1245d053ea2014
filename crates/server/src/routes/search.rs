use actix_web::{get, web, HttpResponse};
use emojisearch_common::EmojiSearchError;
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;
use crate::types::{ErrorResponse, SearchQuery, SearchResponse};

#[get("/search")]
pub async fn search(
    query: web::Query<SearchQuery>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    if query.query.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Query parameter is required"));
    }

    match state.engine.search(&query.query).await {
        Ok(result) => HttpResponse::Ok().json(SearchResponse {
            emoji: result.symbol,
            description: result.description,
            score: result.score,
        }),
        Err(EmojiSearchError::EmptyQuery) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("Query parameter is required")),
        Err(e @ EmojiSearchError::EmbeddingUnavailable(_)) => {
            error!("Embedding provider failed during search: {}", e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorResponse::new("An error occurred during search"))
        }
        Err(e) => {
            error!("An error occurred during search: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An error occurred during search"))
        }
    }
}

#[get("/search/stats")]
pub async fn search_stats(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "catalog_size": state.engine.catalog_size(),
        "embedding_dimension": state.engine.dimension(),
        "embedding_model": state.config.embedding_model,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use emojisearch_common::{AppConfig, Result};
    use emojisearch_embedding::EmbeddingProvider;
    use emojisearch_engine::{CatalogEntry, SearchEngine};
    use std::collections::HashMap;

    struct MockProvider {
        vectors: HashMap<String, Vec<f32>>,
    }

    #[async_trait]
    impl EmbeddingProvider for MockProvider {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            self.vectors.get(text).cloned().ok_or_else(|| {
                EmojiSearchError::embedding(format!("No embedding for: {}", text))
            })
        }
    }

    async fn test_state() -> web::Data<Arc<AppState>> {
        let vectors: HashMap<String, Vec<f32>> = [
            ("grinning face happy", vec![1.0, 0.0]),
            ("crying sad face", vec![0.0, 1.0]),
            ("happy", vec![0.9, 0.1]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let entries = vec![
            CatalogEntry {
                symbol: "😀".to_string(),
                description: "grinning face happy".to_string(),
            },
            CatalogEntry {
                symbol: "😢".to_string(),
                description: "crying sad face".to_string(),
            },
        ];

        let engine = SearchEngine::build(entries, Arc::new(MockProvider { vectors }))
            .await
            .unwrap();

        web::Data::new(Arc::new(AppState::new(
            AppConfig::default(),
            Arc::new(engine),
        )))
    }

    #[actix_web::test]
    async fn test_search_returns_best_match() {
        let app = test::init_service(
            App::new().app_data(test_state().await).service(search),
        )
        .await;

        let req = test::TestRequest::get().uri("/search?query=happy").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["emoji"], "😀");
        assert_eq!(body["description"], "grinning face happy");
        assert!(body["score"].as_f64().unwrap() > 0.9);
    }

    #[actix_web::test]
    async fn test_missing_query_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(test_state().await).service(search),
        )
        .await;

        let req = test::TestRequest::get().uri("/search").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_digit_only_query_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(test_state().await).service(search),
        )
        .await;

        let req = test::TestRequest::get().uri("/search?query=123").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_provider_failure_is_service_unavailable() {
        let app = test::init_service(
            App::new().app_data(test_state().await).service(search),
        )
        .await;

        // Not in the mock table, so the provider reports a failure
        let req = test::TestRequest::get()
            .uri("/search?query=mystery")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }

    #[actix_web::test]
    async fn test_stats_endpoint() {
        let app = test::init_service(
            App::new().app_data(test_state().await).service(search_stats),
        )
        .await;

        let req = test::TestRequest::get().uri("/search/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["catalog_size"], 2);
        assert_eq!(body["embedding_dimension"], 2);
    }
}

//! EmojiSearch HTTP Server
//!
//! Actix-web REST API plus static frontend serving

mod routes;
mod state;
mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use emojisearch_common::{AppConfig, Result};
use emojisearch_engine::SearchEngine;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Start the HTTP server with a fully built search engine
///
/// The engine is constructed by the caller before the server binds, so a
/// catalog or embedding failure aborts startup instead of surfacing on the
/// first request.
pub async fn start_server(config: AppConfig, engine: Arc<SearchEngine>) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config, engine));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(routes::search::search)
            .service(routes::search::search_stats)
            .service(
                actix_files::Files::new("/", static_dir.clone())
                    .index_file("index.html"),
            )
    })
    .bind(&bind_addr)
    .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

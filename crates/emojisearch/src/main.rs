use anyhow::Result;
use clap::{Parser, Subcommand};
use emojisearch_common::{logger, AppConfig};
use emojisearch_embedding::OllamaClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "emojisearch")]
#[command(about = "EmojiSearch - semantic emoji search over dense embeddings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Path to the emoji catalog JSON file
        #[arg(long)]
        catalog: Option<String>,
    },
}

async fn run(config: AppConfig) -> Result<()> {
    config.validate()?;

    let client = OllamaClient::new(&config.ollama_base_url, &config.embedding_model)?;
    if !client.test_connection().await.unwrap_or(false) {
        tracing::warn!(
            "Embedding provider not reachable at {} - startup will fail if it stays down",
            config.ollama_base_url
        );
    }

    // Fail fast: a catalog or index error here prevents the server from starting
    let engine = emojisearch_engine::initialize(&config, Arc::new(client)).await?;

    let bind_addr = config.server_bind_address();
    println!("Server listening on http://{}", bind_addr);

    emojisearch_server::start_server(config, Arc::new(engine)).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // Note: AppConfig::from_env() also loads .env, but we do it here early
    // to ensure any CLI argument overrides work correctly
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port, catalog }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(catalog) = &catalog {
                std::env::set_var("CATALOG_PATH", catalog);
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("EmojiSearch starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Catalog: {}", config.catalog_path.display());
            tracing::info!("  Embedding model: {}", config.embedding_model);

            run(config).await?;
        }
        None => {
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("EmojiSearch starting with default configuration...");

            run(config).await?;
        }
    }

    Ok(())
}

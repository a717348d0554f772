use kindred_api::api::{create_router, AppState};
use kindred_api::config::Config;
use kindred_api::services::catalog::{CatalogSource, JsonFileCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Seed the catalog if a seed file is configured, otherwise start empty
    // and let clients build it via POST /movies
    let state = match &config.catalog_path {
        Some(path) => {
            let source = JsonFileCatalog::new(path.clone());
            let catalog = source.load().await?;
            tracing::info!(
                source = source.name(),
                movie_count = catalog.len(),
                "Catalog loaded"
            );
            AppState::with_catalog(catalog)
        }
        None => AppState::new(),
    };

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

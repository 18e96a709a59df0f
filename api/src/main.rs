use anyhow::Context;
use rc_board::{AppState, app, config::Config, store::RecordStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::load()?;

    let store = RecordStore::open(&config.data_dir);
    store
        .ensure_initialized()
        .await
        .context("failed to initialize data files")?;

    let app = app(AppState::new(store), &config.public_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on http://{}", addr);
    info!("Data directory: {}", config.data_dir.display());
    info!("Static files: {}", config.public_dir.display());
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  POST   /api/signup          - Create account");
    info!("  POST   /api/login           - Login");
    info!("  POST   /api/set-profile     - Set nickname and residential college");
    info!("  POST   /api/update-nickname - Change nickname");
    info!("  POST   /api/update-rc       - Change residential college");
    info!("  GET    /api/posts           - List posts (?rc= to filter)");
    info!("  POST   /api/posts           - Create post");
    info!("  GET    /api/posts/{{id}}      - Get specific post");
    info!("  POST   /api/posts/like      - Toggle like");
    info!("  POST   /api/growth          - Growth widget check-in");

    axum::serve(listener, app).await?;

    Ok(())
}

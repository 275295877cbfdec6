//! Server binary: reads settings from the environment, opens the SQLite store, seeds it when empty,
//! and serves the API and static site.

use pet_adoption::{build_app, connect, ensure_tables, seed, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("pet_adoption=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(path = %settings.database_path.display(), "opening database");
    let pool = connect(&settings.database_path).await?;
    ensure_tables(&pool).await?;
    match seed::seed_if_empty(&pool).await {
        Ok(0) => tracing::info!("pets already present, skipping seed"),
        Ok(n) => tracing::info!(pets = n, "database initialized with sample data"),
        Err(e) => tracing::error!(error = %e, "seeding sample pets failed"),
    }

    let state = AppState::new(pool, settings.site.clone());
    let app = build_app(state, settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

//! Media API server: reads settings from the environment (and `.env`), connects the store, serves HTTP.

use media_api::{app, AppState, MemoryStore, PgStore, Settings, StoreBackend};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("media_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let state = match &settings.store {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await?;
            AppState::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data will not survive a restart");
            AppState::new(MemoryStore::new())
        }
    };

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit_bytes)).await?;
    Ok(())
}

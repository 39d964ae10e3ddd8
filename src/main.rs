use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod middleware;
mod modules;
mod routes;
mod state;

use config::settings::AppConfig;
use infrastructure::db::pool::connect_to_db;
use infrastructure::supabase::client::SupabaseClient;
use modules::render::compositor::PlaceholderCompositor;
use modules::render::repository::{PgVideoStore, SupabaseVideoStore, VideoStore};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    info!("Starting render-video service...");

    let config = AppConfig::new().context("invalid configuration")?;

    let store: Arc<dyn VideoStore> = match &config.database_url {
        Some(database_url) => {
            let pool = connect_to_db(database_url)
                .await
                .context("failed to connect to PostgreSQL")?;
            Arc::new(PgVideoStore::new(pool))
        }
        None => {
            let client = SupabaseClient::new(&config.supabase_url, &config.service_role_key)
                .context("failed to build Supabase client")?;
            Arc::new(SupabaseVideoStore::new(client))
        }
    };
    let compositor = Arc::new(PlaceholderCompositor::new(
        config.project_base(),
        &config.output_bucket,
    ));

    let addr = config.bind_address();
    let state = AppState::new(config, store, compositor);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

mod app;
mod config;
mod error;
mod state;
mod waypoints;

use mimalloc::MiMalloc;
use tracing::Level;

use crate::config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    app::serve(config).await
}

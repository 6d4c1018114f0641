use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = &contactbox::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let storage = contactbox::db::spawn(&cfg.database_path).await?;
    info!(path = %cfg.database_path.display(), "database ready");

    let state = contactbox::router::AppState::new(storage);
    let app = contactbox::router::app_router(state);

    let listener = TcpListener::bind(&cfg.listen).await?;
    info!("HTTP server listening on {}", cfg.listen);
    axum::serve(listener, app).await?;
    Ok(())
}

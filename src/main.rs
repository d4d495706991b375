use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use furnilayout::api::LayoutApi;
use furnilayout::config::CONFIG;
use furnilayout::router::{AppState, api_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &*CONFIG;

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

    info!(
        database_url = %cfg.database_url,
        bind_addr = %cfg.bind_addr,
        layout_service = %cfg.layout_service_url,
        upload_dir = %cfg.upload_dir.display(),
        loglevel = %cfg.loglevel,
    );

    let storage = furnilayout::db::spawn(&cfg.database_url).await?;
    storage
        .upsert_user(&cfg.admin_username, &cfg.admin_password)
        .await?;

    tokio::fs::create_dir_all(&cfg.upload_dir).await?;

    let layout = LayoutApi::new(reqwest::Client::new(), cfg.layout_service_url.clone());
    let state = AppState::new(
        storage,
        layout,
        cfg.upload_dir.clone(),
        cfg.public_base_url.clone(),
    );
    let app = api_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

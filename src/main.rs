use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use arogya::api::{api_router, ApiContext};
use arogya::{config, db, kb, reminder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(version = config::APP_VERSION, "Starting {}", config::APP_NAME);

    let kb_dir = config::kb_dir();
    let kb = Arc::new(kb::KnowledgeBase::load(&kb_dir));
    if kb.is_empty() {
        tracing::warn!(path = %kb_dir.display(), "Knowledge base is empty, chat answers will be limited");
    }

    let db_path = config::database_path();
    // Open once at startup so migrations and seeding run before traffic.
    db::open_database(&db_path)?;
    tracing::info!(path = %db_path.display(), "Database ready");

    let _scheduler = reminder::start(db_path.clone(), kb.clone(), reminder::REMINDER_INTERVAL);

    let ctx = ApiContext::new(db_path, kb);
    let app = api_router(ctx);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

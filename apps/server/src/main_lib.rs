use std::sync::Arc;

use crate::config::Config;
use forum_core::posts::{PostService, PostServiceTrait};
use forum_storage_sqlite::{db, posts::PostRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub post_service: Arc<dyn PostServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Opens the database, applies migrations and wires the services.
///
/// Must run inside a Tokio runtime: it spawns the writer actor.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let post_repo = Arc::new(PostRepository::new(pool.clone(), writer));
    let post_service = Arc::new(PostService::new(post_repo));

    Ok(Arc::new(AppState { post_service }))
}

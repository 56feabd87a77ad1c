use anyhow::Context;
use diesel::{
    r2d2::{ConnectionManager, Pool},
    SqliteConnection,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use kosakata::{
    build_router,
    config::AppConfig,
    data::repositories::VocabularyRepository,
    features::ingest::{self, SeedOutcome},
    features::placeholder::{GlyphSource, PlaceholderRenderer, PlaceholderStyle},
    DbPool,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Database configuration
    let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
    let pool: DbPool = Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .context("Failed to create DB pool")?;

    // Schema and one-time seeding
    {
        let mut conn = pool.get().context("Failed to get DB connection")?;
        VocabularyRepository::ensure_schema(&mut conn).context("Failed to create schema")?;

        match ingest::seed_from_workbook(&mut conn, &config.workbook_path, &config.sheet_names) {
            Ok(SeedOutcome::Inserted { count }) => log::info!("Total entries: {}", count),
            Ok(SeedOutcome::AlreadySeeded { existing }) => {
                log::info!("Vocabulary already loaded ({} entries), skipping workbook", existing)
            }
            Err(e) => log::error!(
                "Failed to load {}: {}. Starting with an empty vocabulary",
                config.workbook_path.display(),
                e
            ),
        }
    }

    // Placeholder images
    let glyphs = GlyphSource::load(config.font_path.as_deref());
    let renderer = Arc::new(PlaceholderRenderer::new(PlaceholderStyle::default(), glyphs));
    log::info!("Placeholder font: {}", renderer.glyphs().describe());

    let app = build_router(pool, renderer, &config.static_dir);

    // Start server
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;

    log::info!("Server running on http://{}", config.bind_addr());

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use diesel::{
    SqliteConnection,
    r2d2::{ConnectionManager, Pool},
};
use tower_http::services::ServeDir;

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod schema;
pub mod utils;

use features::placeholder::PlaceholderRenderer;
use handlers::{search, vocabulary};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Shared handler state: the connection pool and the placeholder renderer.
pub type AppState = (DbPool, Arc<PlaceholderRenderer>);

pub fn build_router(pool: DbPool, renderer: Arc<PlaceholderRenderer>, static_dir: &Path) -> Router {
    let api_router = Router::new()
        .route("/categories", get(vocabulary::list_categories))
        .route("/kategori", get(vocabulary::list_kategori))
        .route("/search", get(search::search_api))
        .route("/vocabulary/{id}", get(vocabulary::get_vocabulary))
        .with_state((pool, renderer));

    Router::new()
        .nest("/api", api_router)
        // front-end files, `/` serves index.html
        .fallback_service(ServeDir::new(static_dir))
}

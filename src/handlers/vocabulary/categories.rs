use axum::{extract::State, Json};

use crate::{
    AppState,
    data::models::{AppError, CategoriesResponse, KategoriResponse},
    data::repositories::VocabularyRepository,
    utils::run_blocking,
};

/// Distinct parts of speech.
pub async fn list_categories(
    State((pool, _)): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = run_blocking(move || {
        let mut conn = pool.get()?;
        Ok(VocabularyRepository::distinct_parts_of_speech(&mut conn)?)
    })
    .await?;

    Ok(Json(CategoriesResponse { categories }))
}

/// Distinct semantic categories.
pub async fn list_kategori(
    State((pool, _)): State<AppState>,
) -> Result<Json<KategoriResponse>, AppError> {
    let kategori = run_blocking(move || {
        let mut conn = pool.get()?;
        Ok(VocabularyRepository::distinct_categories(&mut conn)?)
    })
    .await?;

    Ok(Json(KategoriResponse { kategori }))
}

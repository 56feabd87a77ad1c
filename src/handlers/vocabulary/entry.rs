use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    AppState,
    data::models::{AppError, VocabularyEntry},
    data::repositories::VocabularyRepository,
    features::placeholder::supply_image,
    utils::run_blocking,
};

pub async fn get_vocabulary(
    Path(id): Path<i32>,
    State((pool, renderer)): State<AppState>,
) -> Result<Json<VocabularyEntry>, AppError> {
    let entry = run_blocking(move || {
        let mut conn = pool.get()?;
        let entry = VocabularyRepository::find_by_id(&mut conn, id)?.ok_or(AppError::NotFound)?;
        Ok(supply_image(entry, &renderer)?)
    })
    .await?;

    Ok(Json(entry))
}

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    AppState,
    data::models::{AppError, SearchParams, SearchResult},
    features::{placeholder::supply_image, search::SearchEngine},
    utils::run_blocking,
};

pub async fn search_api(
    Query(params): Query<SearchParams>,
    State((pool, renderer)): State<AppState>,
) -> Result<Json<SearchResult>, AppError> {
    let criteria = params.criteria()?;
    let include_images = params.include_images();

    let result = run_blocking(move || {
        let mut conn = pool.get()?;
        let mut result = SearchEngine::run(&mut conn, &criteria)?;

        // only the returned page gets placeholders
        if include_images {
            result.results = result
                .results
                .into_iter()
                .map(|entry| supply_image(entry, &renderer))
                .collect::<Result<_, _>>()?;
        }
        Ok(result)
    })
    .await?;

    Ok(Json(result))
}

// GET /api/v1/search?topic=&keyword=&sentiment=: all supplied conditions must match.

use axum::extract::{Query, State};
use axum::Json;

use crate::db::models::{Analysis, SearchFilter};
use crate::web::{ApiError, AppState};

pub async fn search_analyses(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Result<Json<Vec<Analysis>>, ApiError> {
    let analyses = state.service.search(filter).await.map_err(|e| {
        tracing::error!(error = %e, "DB error searching analyses");
        ApiError::Internal
    })?;
    Ok(Json(analyses))
}

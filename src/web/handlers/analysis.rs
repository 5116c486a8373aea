// Analysis handlers.
//
// POST /api/v1/analysis      : analyze 1-10 texts, return the stored records
// GET  /api/v1/analysis      : every record, newest first
// GET  /api/v1/analysis/{id} : one record

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::validate_texts;
use crate::db::models::Analysis;
use crate::web::{ApiError, AppState};

#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub texts: Vec<String>,
}

/// POST /api/v1/analysis: texts that fail analysis are left out of the response.
pub async fn create_analyses(
    State(state): State<AppState>,
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Vec<Analysis>>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let texts = validate_texts(&request.texts)?;

    let analyses = state.service.analyze_texts(&texts).await;
    tracing::info!(
        requested = texts.len(),
        stored = analyses.len(),
        "Batch analysis finished"
    );
    Ok(Json(analyses))
}

/// GET /api/v1/analysis
pub async fn list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Analysis>>, ApiError> {
    let analyses = state.service.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "DB error listing analyses");
        ApiError::Internal
    })?;
    Ok(Json(analyses))
}

/// GET /api/v1/analysis/{id}
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Analysis>, ApiError> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|e| ApiError::Validation(format!("Invalid analysis id {id:?}: {e}")))?;

    match state.service.get(&uuid).await {
        Ok(Some(analysis)) => Ok(Json(analysis)),
        Ok(None) => Err(ApiError::NotFound("Analysis")),
        Err(e) => {
            tracing::error!(error = %e, id = %uuid, "DB error fetching analysis");
            Err(ApiError::Internal)
        }
    }
}

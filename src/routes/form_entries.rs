use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::FormEntry;
use crate::state::SharedState;
use crate::submission;

pub async fn create(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<FormEntry>), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if !content_type.is_some_and(|ct| ct.contains("application/json")) {
        return Err(AppError::UnsupportedMediaType(
            "Content-Type must be application/json".to_string(),
        ));
    }

    let raw: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))?;

    let submission = submission::validate(&raw)?;

    let entry = state.create_form_entry.execute(submission.into()).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormEntry>, AppError> {
    let entry = state
        .forms
        .find_entry(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Form entry not found".to_string()))?;
    Ok(Json(entry))
}

use contracts::domain::a001_obligation::{
    DueDateMatrix, DueDateRecord, Obligation, ObligationPayload,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

pub async fn fetch_obligations() -> Result<Vec<Obligation>, ApiError> {
    get_json("/api/obligaciones").await
}

pub async fn fetch_obligation(id: i64) -> Result<Obligation, ApiError> {
    get_json(&format!("/api/obligaciones/{}", id)).await
}

pub async fn fetch_due_dates(id: i64) -> Result<Vec<DueDateRecord>, ApiError> {
    get_json(&format!("/api/obligaciones/{}/vencimientos", id)).await
}

/// Due dates of `id` as a grid. Duplicate cells are logged, the first day wins.
pub async fn fetch_due_date_matrix(id: i64) -> Result<DueDateMatrix, ApiError> {
    let build = DueDateMatrix::build(fetch_due_dates(id).await?);
    for c in &build.conflicts {
        log::warn!(
            "obligation {}: duplicate due date for month {} / CUIT {} (kept {}, ignored {})",
            id,
            c.month,
            c.digit,
            c.kept,
            c.ignored
        );
    }
    if build.skipped > 0 {
        log::warn!("obligation {}: {} due dates outside the grid", id, build.skipped);
    }
    Ok(build.matrix)
}

pub async fn create_obligation(payload: &ObligationPayload) -> Result<(), ApiError> {
    post_json("/api/obligaciones", payload).await
}

pub async fn update_obligation(id: i64, payload: &ObligationPayload) -> Result<(), ApiError> {
    put_json(&format!("/api/obligaciones/{}", id), payload).await
}

pub async fn delete_obligation(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/obligaciones/{}", id)).await
}

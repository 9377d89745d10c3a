use axum::Json;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mindcare_core::keys;
use mindcare_core::models::forum::ForumPost;
use mindcare_core::models::metrics::{Dashboard, UsageMetrics};
use mindcare_core::models::student::Student;
use mindcare_storage::documents;
use mindcare_storage::store::DocumentStore;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usage;

async fn build_dashboard(store: &dyn DocumentStore) -> Result<(Dashboard, Vec<Student>), ApiError> {
    let metrics = usage::load_metrics(store).await?;
    let students: Vec<Student> = documents::load_all(store, keys::STUDENTS_PREFIX).await?;
    let posts: Vec<ForumPost> = documents::load_all(store, keys::FORUM_PREFIX).await?;
    Ok((Dashboard::compute(metrics, &students, &posts), students))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, ApiError> {
    let (dashboard, _) = build_dashboard(state.store.as_ref()).await?;
    Ok(Json(dashboard))
}

pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = documents::load_all(state.store.as_ref(), keys::STUDENTS_PREFIX).await?;
    Ok(Json(students))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    generated_at: jiff::Timestamp,
    dashboard: Dashboard,
    students: Vec<Student>,
}

/// Dashboard snapshot as a downloadable JSON attachment.
pub async fn download_report(State(state): State<AppState>) -> Result<Response, ApiError> {
    let (dashboard, students) = build_dashboard(state.store.as_ref()).await?;
    let generated_at = jiff::Timestamp::now();

    let body = serde_json::to_vec_pretty(&Report {
        generated_at,
        dashboard,
        students,
    })
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    let filename = format!(
        "mindcare-report-{}.json",
        generated_at.to_zoned(jiff::tz::TimeZone::UTC).date()
    );

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    students_deleted: usize,
}

/// Zero every counter and delete all student records.
pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, ApiError> {
    let store = state.store.as_ref();
    documents::save(store, keys::USAGE_METRICS, &UsageMetrics::default()).await?;
    let students_deleted = documents::delete_prefix(store, keys::STUDENTS_PREFIX).await?;

    tracing::warn!(students_deleted, "usage metrics and student records reset");
    Ok(Json(ResetResponse { students_deleted }))
}

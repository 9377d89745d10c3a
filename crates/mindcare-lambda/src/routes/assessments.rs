use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::student::{RiskLevel, Student};
use mindcare_instruments::risk::classify_risk;
use mindcare_instruments::scoring::{AnswerSet, ScoreResult};
use mindcare_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usage;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    instrument_id: String,
    answers: AnswerSet,
    /// Returned by a previous submission; omitted on the first one.
    #[serde(default)]
    student_id: Option<Uuid>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    profession: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    student_id: Uuid,
    score: ScoreResult,
    risk_level: RiskLevel,
}

/// Score a questionnaire and record the result on the student.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let score = mindcare_instruments::score(&req.instrument_id, &req.answers)?;
    let now = jiff::Timestamp::now();
    let store = state.store.as_ref();

    let existing: Option<Student> = match req.student_id {
        Some(id) => documents::load(store, &keys::student(id)).await?,
        None => None,
    };
    let is_new = existing.is_none();

    let mut student = existing.unwrap_or_else(|| Student {
        id: req.student_id.unwrap_or_else(Uuid::new_v4),
        name: "Anonymous".to_string(),
        profession: "Student".to_string(),
        phq9_score: None,
        gad7_score: None,
        risk_level: RiskLevel::Low,
        last_assessment: None,
        sessions_booked: 0,
        created_at: now,
    });

    if let Some(name) = req.name.filter(|n| !n.trim().is_empty()) {
        student.name = name.trim().to_string();
    }
    if let Some(profession) = req.profession.filter(|p| !p.trim().is_empty()) {
        student.profession = profession.trim().to_string();
    }

    match score.instrument_id.as_str() {
        "phq9" => student.phq9_score = Some(score.total),
        "gad7" => student.gad7_score = Some(score.total),
        _ => {}
    }
    student.risk_level = classify_risk(student.phq9_score, student.gad7_score);
    student.last_assessment = Some(now);

    documents::save(store, &keys::student(student.id), &student).await?;
    usage::update_metrics(store, |m| {
        m.assessments_completed += 1;
        if is_new {
            m.registered_users += 1;
        }
    })
    .await?;

    tracing::info!(
        student_id = %student.id,
        instrument = %score.instrument_id,
        total = score.total,
        risk = student.risk_level.as_str(),
        "assessment recorded"
    );

    Ok(Json(AssessmentResponse {
        student_id: student.id,
        score,
        risk_level: student.risk_level,
    }))
}

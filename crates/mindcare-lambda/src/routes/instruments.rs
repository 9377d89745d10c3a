use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mindcare_instruments::scoring::{AnswerOption, Question, SeverityBand};
use mindcare_instruments::{Instrument, all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSummary {
    id: String,
    name: String,
    description: String,
    question_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    id: String,
    name: String,
    description: String,
    questions: Vec<Question>,
    options: Vec<AnswerOption>,
    bands: Vec<SeverityBand>,
    max_score: u32,
}

fn summary(instrument: &dyn Instrument) -> InstrumentSummary {
    InstrumentSummary {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        description: instrument.description().to_string(),
        question_count: instrument.questions().len(),
    }
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments = all_instruments().iter().map(|i| summary(i.as_ref())).collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        description: instrument.description().to_string(),
        questions: instrument.questions().to_vec(),
        options: instrument.options().to_vec(),
        bands: instrument.bands().to_vec(),
        max_score: instrument.max_score(),
    }))
}

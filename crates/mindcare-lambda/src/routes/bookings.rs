use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use mindcare_core::keys;
use mindcare_core::models::booking::{
    BOOKING_SLOTS, Booking, Counselor, counselors, find_counselor, is_booking_slot,
};
use mindcare_core::models::student::Student;
use mindcare_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::usage;

pub async fn list_counselors() -> Json<Vec<Counselor>> {
    Json(counselors())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    counselor_id: String,
    date: jiff::civil::Date,
    time: jiff::civil::Time,
    #[serde(default)]
    description: Option<String>,
    /// Student record whose booked-session count this booking adds to.
    #[serde(default)]
    student_id: Option<Uuid>,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let counselor = find_counselor(&req.counselor_id)
        .ok_or_else(|| ApiError::NotFound(format!("counselor not found: {}", req.counselor_id)))?;
    if !counselor.available {
        return Err(ApiError::BadRequest(format!(
            "{} is not available for booking",
            counselor.name
        )));
    }

    let today = jiff::Zoned::now().date();
    if req.date < today {
        return Err(ApiError::BadRequest(format!(
            "booking date {} is in the past",
            req.date
        )));
    }

    if !is_booking_slot(req.time) {
        let slots: Vec<String> = BOOKING_SLOTS
            .iter()
            .map(|t| t.strftime("%H:%M").to_string())
            .collect();
        return Err(ApiError::BadRequest(format!(
            "{} is not a bookable time, choose one of {}",
            req.time,
            slots.join(", ")
        )));
    }

    let store = state.store.as_ref();
    let student: Option<Student> = match req.student_id {
        Some(id) => Some(documents::load_required(store, &keys::student(id)).await?),
        None => None,
    };

    let booking = Booking {
        id: Uuid::new_v4(),
        counselor_id: counselor.id,
        user_id: user.sub,
        date: req.date,
        time: req.time,
        description: req
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        created_at: jiff::Timestamp::now(),
    };

    documents::save(store, &keys::booking(booking.id), &booking).await?;
    if let Some(mut student) = student {
        student.sessions_booked += 1;
        documents::save(store, &keys::student(student.id), &student).await?;
    }
    usage::update_metrics(store, |m| m.sessions_booked += 1).await?;

    tracing::info!(booking_id = %booking.id, counselor_id = %booking.counselor_id, "session booked");
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Bookings made by the calling user, soonest first.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let mut bookings: Vec<Booking> =
        documents::load_all(state.store.as_ref(), keys::BOOKINGS_PREFIX).await?;
    bookings.retain(|b| b.user_id == user.sub);
    bookings.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    Ok(Json(bookings))
}

use axum::Json;
use serde::Serialize;

use mindcare_core::guest::new_guest_id;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    guest_id: String,
}

pub async fn create_guest() -> Json<GuestResponse> {
    Json(GuestResponse {
        guest_id: new_guest_id(jiff::Timestamp::now()),
    })
}

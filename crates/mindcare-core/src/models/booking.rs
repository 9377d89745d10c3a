use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A counselor in the booking directory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialization: String,
    /// Initials shown in place of a photo.
    pub avatar: String,
    pub available: bool,
    pub next_available: Option<String>,
}

/// A confirmed counselling session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Booking {
    pub id: Uuid,
    pub counselor_id: String,
    pub user_id: String,
    pub date: jiff::civil::Date,
    pub time: jiff::civil::Time,
    pub description: Option<String>,
    pub created_at: jiff::Timestamp,
}

/// Session start times offered by every counselor.
pub const BOOKING_SLOTS: [jiff::civil::Time; 6] = [
    jiff::civil::time(9, 0, 0, 0),
    jiff::civil::time(10, 0, 0, 0),
    jiff::civil::time(11, 0, 0, 0),
    jiff::civil::time(14, 0, 0, 0),
    jiff::civil::time(15, 0, 0, 0),
    jiff::civil::time(16, 0, 0, 0),
];

pub fn is_booking_slot(time: jiff::civil::Time) -> bool {
    BOOKING_SLOTS.contains(&time)
}

/// The fixed counselor directory.
pub fn counselors() -> Vec<Counselor> {
    fn counselor(
        id: &str,
        name: &str,
        title: &str,
        specialization: &str,
        avatar: &str,
        next_available: Option<&str>,
    ) -> Counselor {
        Counselor {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            specialization: specialization.to_string(),
            avatar: avatar.to_string(),
            available: next_available.is_none(),
            next_available: next_available.map(str::to_string),
        }
    }

    vec![
        counselor(
            "1",
            "Dr. Priya Sharma",
            "Clinical Psychologist",
            "Anxiety & Stress Management",
            "PS",
            None,
        ),
        counselor(
            "2",
            "Mr. Rahul Verma",
            "Counseling Psychologist",
            "Academic Stress & Relationships",
            "RV",
            None,
        ),
        counselor(
            "3",
            "Dr. Anita Desai",
            "Senior Counselor",
            "Depression & Trauma Support",
            "AD",
            Some("Tomorrow"),
        ),
        counselor(
            "4",
            "Ms. Kavita Singh",
            "Wellness Coach",
            "Mindfulness & Self-care",
            "KS",
            None,
        ),
    ]
}

pub fn find_counselor(id: &str) -> Option<Counselor> {
    counselors().into_iter().find(|c| c.id == id)
}

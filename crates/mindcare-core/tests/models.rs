use mindcare_core::guest::{GUEST_SUFFIX_LEN, is_guest_id, new_guest_id};
use mindcare_core::keys;
use mindcare_core::models::booking::{BOOKING_SLOTS, counselors, find_counselor, is_booking_slot};
use mindcare_core::models::forum::ForumPost;
use mindcare_core::models::metrics::{Dashboard, UsageEvent, UsageMetrics};
use mindcare_core::models::student::{RiskLevel, Student};
use uuid::Uuid;

fn student(phq9: Option<u32>, gad7: Option<u32>, risk_level: RiskLevel) -> Student {
    Student {
        id: Uuid::new_v4(),
        name: "Test".to_string(),
        profession: "Student".to_string(),
        phq9_score: phq9,
        gad7_score: gad7,
        risk_level,
        last_assessment: None,
        sessions_booked: 0,
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn message_keys_sort_in_creation_order() {
    let early = jiff::Timestamp::from_millisecond(9_999).unwrap();
    let late = jiff::Timestamp::from_millisecond(10_000).unwrap();

    let a = keys::chat_message("guest_1_abc", early, Uuid::new_v4());
    let b = keys::chat_message("guest_1_abc", late, Uuid::new_v4());

    assert!(a.starts_with(&keys::chat_messages_prefix("guest_1_abc")));
    assert!(a < b, "{a} should sort before {b}");
}

#[test]
fn owner_ids_are_restricted() {
    assert!(keys::validate_owner_id("guest_1700000000000_k3j4h5g6f").is_ok());
    assert!(keys::validate_owner_id("AbC123xyz").is_ok());
    assert!(keys::validate_owner_id("").is_err());
    assert!(keys::validate_owner_id("../students").is_err());
    assert!(keys::validate_owner_id("a/b").is_err());
    assert!(keys::validate_owner_id(&"x".repeat(129)).is_err());
}

#[test]
fn guest_id_shape() {
    let now = jiff::Timestamp::from_millisecond(1_700_000_000_123).unwrap();
    let id = new_guest_id(now);

    assert!(is_guest_id(&id));
    let rest = id.strip_prefix("guest_1700000000123_").unwrap();
    assert_eq!(rest.len(), GUEST_SUFFIX_LEN);
    assert!(rest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert!(keys::validate_owner_id(&id).is_ok());
}

#[test]
fn guest_ids_differ() {
    let now = jiff::Timestamp::now();
    assert_ne!(new_guest_id(now), new_guest_id(now));
}

#[test]
fn counselor_directory() {
    let all = counselors();
    assert_eq!(all.len(), 4);
    assert!(find_counselor("1").unwrap().available);

    let busy = find_counselor("3").unwrap();
    assert!(!busy.available);
    assert_eq!(busy.next_available.as_deref(), Some("Tomorrow"));

    assert!(find_counselor("99").is_none());
}

#[test]
fn booking_slots_are_whole_hours_in_office_time() {
    assert_eq!(BOOKING_SLOTS.len(), 6);
    assert!(is_booking_slot(jiff::civil::time(9, 0, 0, 0)));
    assert!(is_booking_slot(jiff::civil::time(14, 0, 0, 0)));
    assert!(!is_booking_slot(jiff::civil::time(12, 0, 0, 0)));
    assert!(!is_booking_slot(jiff::civil::time(3, 17, 0, 0)));
    assert!(!is_booking_slot(jiff::civil::time(9, 0, 30, 0)));
}

#[test]
fn usage_events_increment_their_counter() {
    let mut metrics = UsageMetrics::default();
    metrics.record(UsageEvent::ResourceView);
    metrics.record(UsageEvent::ResourceView);
    metrics.record(UsageEvent::CrisisHelplineClick);
    metrics.record(UsageEvent::ChatbotSession);

    assert_eq!(metrics.resource_views, 2);
    assert_eq!(metrics.emergency_contacts, 1);
    assert_eq!(metrics.chatbot_sessions, 1);
    assert_eq!(metrics.sessions_booked, 0);
}

#[test]
fn metrics_tolerate_missing_fields() {
    let metrics: UsageMetrics = serde_json::from_str(r#"{"forumPosts": 3}"#).unwrap();
    assert_eq!(metrics.forum_posts, 3);
    assert_eq!(metrics.registered_users, 0);
}

#[test]
fn empty_dashboard() {
    let dashboard = Dashboard::compute(UsageMetrics::default(), &[], &[]);
    assert_eq!(dashboard.avg_mood_score, 0.0);
    assert_eq!(dashboard.student_count, 0);
    assert!(dashboard.risk_distribution.is_empty());
    assert_eq!(dashboard.forum_activity, 0);
}

#[test]
fn dashboard_derived_figures() {
    let students = vec![
        // 10 - 0 / 2 = 10
        student(Some(0), Some(0), RiskLevel::Low),
        // 10 - 12 / 2 = 4
        student(Some(12), None, RiskLevel::Moderate),
        // 10 - 40 / 2 clamps to 0
        student(Some(20), Some(20), RiskLevel::High),
    ];
    let posts = vec![ForumPost {
        id: Uuid::new_v4(),
        author: "Anonymous Student".to_string(),
        content: "hello".to_string(),
        tags: vec![],
        likes: 0,
        replies: 5,
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }];
    let metrics = UsageMetrics {
        forum_posts: 2,
        ..UsageMetrics::default()
    };

    let dashboard = Dashboard::compute(metrics, &students, &posts);

    assert!((dashboard.avg_mood_score - 14.0 / 3.0).abs() < 1e-9);
    assert_eq!(dashboard.student_count, 3);
    assert_eq!(dashboard.risk_distribution[&RiskLevel::Low], 1);
    assert_eq!(dashboard.risk_distribution[&RiskLevel::Moderate], 1);
    assert_eq!(dashboard.risk_distribution[&RiskLevel::High], 1);
    assert_eq!(dashboard.forum_activity, 7);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["riskDistribution"]["high"], 1);
}

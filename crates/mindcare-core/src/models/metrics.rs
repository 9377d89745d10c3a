use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::forum::ForumPost;
use super::student::{RiskLevel, Student};

/// Aggregate usage counters shown on the admin dashboard.
///
/// Stored as a single document; concurrent increments are last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct UsageMetrics {
    pub registered_users: u64,
    pub sessions_booked: u64,
    pub resource_views: u64,
    pub forum_posts: u64,
    pub emergency_contacts: u64,
    pub assessments_completed: u64,
    pub chatbot_sessions: u64,
}

/// Usage events reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UsageEvent {
    ResourceView,
    CrisisHelplineClick,
    ChatbotSession,
}

impl UsageMetrics {
    pub fn record(&mut self, event: UsageEvent) {
        match event {
            UsageEvent::ResourceView => self.resource_views += 1,
            UsageEvent::CrisisHelplineClick => self.emergency_contacts += 1,
            UsageEvent::ChatbotSession => self.chatbot_sessions += 1,
        }
    }
}

/// Admin dashboard: raw counters plus figures derived from student records
/// and forum posts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dashboard {
    pub metrics: UsageMetrics,
    pub student_count: u64,
    /// Mean of `max(0, 10 - (phq9 + gad7) / 2)` over all students.
    pub avg_mood_score: f64,
    pub risk_distribution: BTreeMap<RiskLevel, u64>,
    /// Posts plus their replies.
    pub forum_activity: u64,
}

impl Dashboard {
    pub fn compute(metrics: UsageMetrics, students: &[Student], posts: &[ForumPost]) -> Self {
        let avg_mood_score = if students.is_empty() {
            0.0
        } else {
            let total: f64 = students
                .iter()
                .map(|s| {
                    let combined = s.phq9_score.unwrap_or(0) + s.gad7_score.unwrap_or(0);
                    (10.0 - f64::from(combined) / 2.0).max(0.0)
                })
                .sum();
            total / students.len() as f64
        };

        let mut risk_distribution = BTreeMap::new();
        for student in students {
            *risk_distribution.entry(student.risk_level).or_insert(0) += 1;
        }

        let replies: u64 = posts.iter().map(|p| u64::from(p.replies)).sum();

        Self {
            forum_activity: metrics.forum_posts + replies,
            metrics,
            student_count: students.len() as u64,
            avg_mood_score,
            risk_distribution,
        }
    }
}

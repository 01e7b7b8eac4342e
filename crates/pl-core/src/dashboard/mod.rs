//! Dashboard read models
//!
//! Row shapes returned by the dashboard views of the store. Field names follow
//! the store's column names so rows deserialize without renaming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CandidateId, UserId};

pub mod timestamp;

/// Aggregated candidate overview (`candidate_dashboard` view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDashboard {
    pub candidate_id: CandidateId,
    pub user_id: UserId,
    pub full_name: String,
    pub career_stage: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    // Match info
    pub match_id: Option<String>,
    pub agent_name: Option<String>,
    pub agent_avatar: Option<String>,
    pub agent_specializations: Option<Vec<String>>,
    pub agent_years_experience: Option<f64>,

    // Subscription info
    pub subscription_id: Option<String>,
    pub plan_name: Option<String>,
    pub subscription_status: Option<String>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub current_period_end: Option<DateTime<Utc>>,
    pub jobs_used: Option<i64>,
    pub jobs_limit: Option<i64>,
    pub agent_hours_used: Option<f64>,
    pub agent_hours_limit: Option<f64>,

    // Stats
    pub saved_jobs: i64,
    pub delegated_jobs: i64,
    pub applied_jobs: i64,
    pub interviewing_jobs: i64,
    pub unread_messages: i64,
}

impl CandidateDashboard {
    pub fn has_agent(&self) -> bool {
        self.match_id.is_some()
    }

    pub fn has_active_subscription(&self) -> bool {
        self.subscription_status.as_deref() == Some("active")
    }

    /// `None` when the plan has no job quota.
    pub fn jobs_remaining(&self) -> Option<i64> {
        let limit = self.jobs_limit?;
        Some((limit - self.jobs_used.unwrap_or(0)).max(0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    pub activity_type: String,
    pub description: String,
    pub performed_by_role: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMessage {
    pub id: String,
    pub sender_id: UserId,
    pub content: String,
    pub is_read: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
    pub sender_avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub file_name: String,
    pub document_type: String,
    pub file_size: i64,
    pub is_shared_with_agent: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

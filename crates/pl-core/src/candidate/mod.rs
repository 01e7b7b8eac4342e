//! Candidate domain models
//!
//! A candidate is the job-seeker profile linked 1:1 to a user account.
//! The onboarding logic only ever reads the id and the completion flag,
//! and only ever writes the flag together with `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CandidateId, UserId};

/// Full candidate row as stored in the `candidates` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub user_id: UserId,
    pub onboarding_completed: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn new(id: CandidateId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            onboarding_completed: false,
            updated_at: None,
        }
    }

    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            id: self.id.clone(),
            onboarding_completed: self.onboarding_completed,
        }
    }
}

/// Projection used by onboarding reconciliation (`id, onboarding_completed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: CandidateId,
    pub onboarding_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_starts_incomplete() {
        let candidate = Candidate::new(CandidateId::from("c1"), UserId::from("u1"));
        assert!(!candidate.onboarding_completed);
        assert!(candidate.updated_at.is_none());
    }

    #[test]
    fn test_summary_projects_id_and_flag() {
        let mut candidate = Candidate::new(CandidateId::from("c1"), UserId::from("u1"));
        candidate.onboarding_completed = true;

        let summary = candidate.summary();
        assert_eq!(summary.id.as_str(), "c1");
        assert!(summary.onboarding_completed);
    }
}

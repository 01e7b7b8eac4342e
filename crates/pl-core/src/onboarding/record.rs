use serde::{Deserialize, Serialize};

use super::status::StepStatus;
use crate::ids::CandidateId;

/// One row of `candidate_onboarding_steps`, keyed by `(candidate_id, step_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStepRecord {
    pub candidate_id: CandidateId,
    pub step_name: String,
    pub status: StepStatus,
}

/// Row to be created for a step the candidate has no record for yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOnboardingStepRecord {
    pub candidate_id: CandidateId,
    pub step_name: String,
    pub status: StepStatus,
}

impl NewOnboardingStepRecord {
    pub fn pending(candidate_id: CandidateId, step_name: impl Into<String>) -> Self {
        Self {
            candidate_id,
            step_name: step_name.into(),
            status: StepStatus::Pending,
        }
    }
}

impl From<NewOnboardingStepRecord> for OnboardingStepRecord {
    fn from(record: NewOnboardingStepRecord) -> Self {
        Self {
            candidate_id: record.candidate_id,
            step_name: record.step_name,
            status: record.status,
        }
    }
}

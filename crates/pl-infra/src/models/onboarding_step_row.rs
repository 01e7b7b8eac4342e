use pl_core::ids::CandidateId;
use pl_core::onboarding::{NewOnboardingStepRecord, OnboardingStepRecord, StepStatus};
use serde::{Deserialize, Serialize};

/// `select=step_name,status` on `candidate_onboarding_steps`.
#[derive(Debug, Deserialize)]
pub struct OnboardingStepRow {
    pub step_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl OnboardingStepRow {
    pub fn into_record(self, candidate_id: &CandidateId) -> OnboardingStepRecord {
        OnboardingStepRecord {
            candidate_id: candidate_id.clone(),
            step_name: self.step_name,
            status: status_from_column(self.status),
        }
    }
}

/// `select=status` on `candidate_onboarding_steps`.
#[derive(Debug, Deserialize)]
pub struct StepStatusRow {
    #[serde(default)]
    pub status: Option<String>,
}

impl From<StepStatusRow> for StepStatus {
    fn from(row: StepStatusRow) -> Self {
        status_from_column(row.status)
    }
}

#[derive(Debug, Serialize)]
pub struct NewOnboardingStepRow<'a> {
    pub candidate_id: &'a str,
    pub step_name: &'a str,
    pub status: &'a str,
}

impl<'a> From<&'a NewOnboardingStepRecord> for NewOnboardingStepRow<'a> {
    fn from(record: &'a NewOnboardingStepRecord) -> Self {
        Self {
            candidate_id: record.candidate_id.as_str(),
            step_name: &record.step_name,
            status: record.status.as_str(),
        }
    }
}

// A NULL status is an unknown status: never completed.
fn status_from_column(raw: Option<String>) -> StepStatus {
    raw.map(StepStatus::from)
        .unwrap_or_else(|| StepStatus::Other(String::new()))
}

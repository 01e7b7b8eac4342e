use std::sync::Arc;

use async_trait::async_trait;

use pl_core::ids::CandidateId;
use pl_core::onboarding::{NewOnboardingStepRecord, OnboardingStepRecord, StepStatus};
use pl_core::ports::{OnboardingStepRepositoryPort, QueryError};

use crate::models::{NewOnboardingStepRow, OnboardingStepRow, StepStatusRow};
use crate::rest::RestClient;

pub const ONBOARDING_STEPS_TABLE: &str = "candidate_onboarding_steps";

/// Unique key the store enforces on step records.
const STEP_CONFLICT_TARGET: &str = "candidate_id,step_name";

pub struct RestOnboardingStepRepository {
    client: Arc<RestClient>,
}

impl RestOnboardingStepRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OnboardingStepRepositoryPort for RestOnboardingStepRepository {
    async fn list_for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<OnboardingStepRecord>, QueryError> {
        let rows: Vec<OnboardingStepRow> = self
            .client
            .table(ONBOARDING_STEPS_TABLE)
            .eq("candidate_id", candidate_id)
            .select("step_name,status")
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_record(candidate_id))
            .collect())
    }

    async fn insert_missing(&self, records: &[NewOnboardingStepRecord]) -> Result<(), QueryError> {
        let rows: Vec<NewOnboardingStepRow<'_>> =
            records.iter().map(NewOnboardingStepRow::from).collect();

        self.client
            .table(ONBOARDING_STEPS_TABLE)
            .upsert_ignore_duplicates(&rows, STEP_CONFLICT_TARGET)
            .await
    }

    async fn list_statuses(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<StepStatus>, QueryError> {
        let rows: Vec<StepStatusRow> = self
            .client
            .table(ONBOARDING_STEPS_TABLE)
            .eq("candidate_id", candidate_id)
            .select("status")
            .await?;

        Ok(rows.into_iter().map(StepStatus::from).collect())
    }
}

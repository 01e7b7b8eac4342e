use async_trait::async_trait;

use crate::{
    ids::CandidateId,
    onboarding::{NewOnboardingStepRecord, OnboardingStepRecord, StepStatus},
    ports::errors::QueryError,
};

#[async_trait]
pub trait OnboardingStepRepositoryPort: Send + Sync {
    /// All step records (`step_name`, `status`) of a candidate, store order.
    async fn list_for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<OnboardingStepRecord>, QueryError>;

    /// Create records keyed on `(candidate_id, step_name)`.
    ///
    /// Requirements:
    /// - Idempotent: a record that already exists is left untouched
    /// - Safe under concurrent callers for the same candidate
    async fn insert_missing(&self, records: &[NewOnboardingStepRecord]) -> Result<(), QueryError>;

    /// Statuses of all step records of a candidate, read fresh from the store.
    async fn list_statuses(&self, candidate_id: &CandidateId)
        -> Result<Vec<StepStatus>, QueryError>;
}

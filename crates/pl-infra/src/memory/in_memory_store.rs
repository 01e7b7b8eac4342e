//! In-memory implementation of the candidate and step repositories.
//!
//! Behaves like the remote store for the operations the ports expose,
//! including the unique key on `(candidate_id, step_name)`. Used by tests and
//! dry runs that must not touch the real backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use pl_core::candidate::{Candidate, CandidateSummary};
use pl_core::ids::{CandidateId, UserId};
use pl_core::onboarding::{NewOnboardingStepRecord, OnboardingStepRecord, StepStatus};
use pl_core::ports::{CandidateRepositoryPort, OnboardingStepRepositoryPort, QueryError};

/// Write counters, for asserting what a caller did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Step rows actually created
    pub steps_inserted: usize,
    /// Calls to `insert_missing`
    pub insert_calls: usize,
    /// Calls to `set_onboarding_completed`
    pub flag_updates: usize,
}

#[derive(Default)]
struct State {
    candidates: Vec<Candidate>,
    steps: Vec<OnboardingStepRecord>,
    stats: StoreStats,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_candidate(&self, candidate: Candidate) {
        self.state.lock().await.candidates.push(candidate);
    }

    pub async fn candidate(&self, id: &CandidateId) -> Option<Candidate> {
        let state = self.state.lock().await;
        state.candidates.iter().find(|c| &c.id == id).cloned()
    }

    /// Seed or overwrite a step record, as an external "mark step" flow would.
    pub async fn put_step(&self, candidate_id: &CandidateId, step_name: &str, status: StepStatus) {
        let mut state = self.state.lock().await;
        let position = state
            .steps
            .iter()
            .position(|r| &r.candidate_id == candidate_id && r.step_name == step_name);
        match position {
            Some(index) => state.steps[index].status = status,
            None => state.steps.push(OnboardingStepRecord {
                candidate_id: candidate_id.clone(),
                step_name: step_name.to_string(),
                status,
            }),
        }
    }

    pub async fn steps_of(&self, candidate_id: &CandidateId) -> Vec<OnboardingStepRecord> {
        let state = self.state.lock().await;
        state
            .steps
            .iter()
            .filter(|r| &r.candidate_id == candidate_id)
            .cloned()
            .collect()
    }

    pub async fn stats(&self) -> StoreStats {
        self.state.lock().await.stats
    }
}

#[async_trait]
impl CandidateRepositoryPort for InMemoryStore {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CandidateSummary>, QueryError> {
        let state = self.state.lock().await;
        let mut matches = state.candidates.iter().filter(|c| &c.user_id == user_id);
        match (matches.next(), matches.next()) {
            (None, _) => Ok(None),
            (Some(candidate), None) => Ok(Some(candidate.summary())),
            (Some(_), Some(_)) => Err(QueryError::AmbiguousResult(format!(
                "more than one candidate linked to user {}",
                user_id
            ))),
        }
    }

    async fn set_onboarding_completed(
        &self,
        id: &CandidateId,
        completed: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), QueryError> {
        let mut state = self.state.lock().await;
        state.stats.flag_updates += 1;
        // Like a filtered PATCH: no match is not an error.
        if let Some(candidate) = state.candidates.iter_mut().find(|c| &c.id == id) {
            candidate.onboarding_completed = completed;
            candidate.updated_at = Some(updated_at);
        }
        Ok(())
    }
}

#[async_trait]
impl OnboardingStepRepositoryPort for InMemoryStore {
    async fn list_for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<OnboardingStepRecord>, QueryError> {
        Ok(self.steps_of(candidate_id).await)
    }

    async fn insert_missing(&self, records: &[NewOnboardingStepRecord]) -> Result<(), QueryError> {
        let mut state = self.state.lock().await;
        state.stats.insert_calls += 1;
        for record in records {
            let exists = state.steps.iter().any(|r| {
                r.candidate_id == record.candidate_id && r.step_name == record.step_name
            });
            if !exists {
                state.steps.push(record.clone().into());
                state.stats.steps_inserted += 1;
            }
        }
        Ok(())
    }

    async fn list_statuses(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<StepStatus>, QueryError> {
        let state = self.state.lock().await;
        Ok(state
            .steps
            .iter()
            .filter(|r| &r.candidate_id == candidate_id)
            .map(|r| r.status.clone())
            .collect())
    }
}

//! 判断候选人是否完成入门引导的用例

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use pl_core::ids::UserId;
use pl_core::onboarding::{evaluate, missing_steps, CompletionVerdict, NewOnboardingStepRecord};
use pl_core::ports::{CandidateRepositoryPort, ClockPort, OnboardingStepRepositoryPort, QueryError};
use pl_core::session::Session;
use pl_core::StepRegistry;

/// Use case for reconciling and reporting a candidate's onboarding state.
///
/// Each run:
/// 1. resolves the candidate linked to the user (none → `false`, no writes)
/// 2. creates a `pending` record for every registry step the candidate lacks
/// 3. re-reads all step statuses and writes the derived
///    `onboarding_completed` flag back to the candidate
///
/// The stored flag is never trusted as a shortcut; statuses are always
/// re-verified. Store failures are returned as-is, with no retry and no
/// rollback of step records already created.
pub struct IsOnboardingComplete {
    candidates: Arc<dyn CandidateRepositoryPort>,
    steps: Arc<dyn OnboardingStepRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    registry: Arc<StepRegistry>,
}

impl IsOnboardingComplete {
    pub fn new(
        candidates: Arc<dyn CandidateRepositoryPort>,
        steps: Arc<dyn OnboardingStepRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        registry: Arc<StepRegistry>,
    ) -> Self {
        Self {
            candidates,
            steps,
            clock,
            registry,
        }
    }

    /// Reconcile for whoever is signed in. Anonymous sessions are never
    /// onboarded and cause no store access.
    pub async fn execute_for_session(&self, session: &Session) -> Result<bool, QueryError> {
        match session.user_id() {
            Some(user_id) => self.execute(user_id).await,
            None => {
                debug!("No authenticated user, onboarding not complete");
                Ok(false)
            }
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<bool, QueryError> {
        let span = info_span!("usecase.is_onboarding_complete.execute", user_id = %user_id);

        async {
            let Some(candidate) = self.candidates.find_by_user_id(user_id).await? else {
                info!("No candidate linked to user");
                return Ok(false);
            };
            let candidate_id = candidate.id;
            debug!(
                candidate_id = %candidate_id,
                stored_flag = candidate.onboarding_completed,
                "Candidate found, verifying step records"
            );

            let existing = self.steps.list_for_candidate(&candidate_id).await?;

            let missing: Vec<NewOnboardingStepRecord> = missing_steps(&self.registry, &existing)
                .into_iter()
                .map(|step| NewOnboardingStepRecord::pending(candidate_id.clone(), &step.name))
                .collect();
            if !missing.is_empty() {
                info!(
                    candidate_id = %candidate_id,
                    count = missing.len(),
                    "Creating missing onboarding step records"
                );
                self.steps.insert_missing(&missing).await?;
            }

            let statuses = self.steps.list_statuses(&candidate_id).await?;
            let completed = match evaluate(&statuses) {
                CompletionVerdict::NoRecords => {
                    info!(candidate_id = %candidate_id, "No step records after reconciliation");
                    return Ok(false);
                }
                verdict => verdict.is_complete(),
            };

            self.candidates
                .set_onboarding_completed(&candidate_id, completed, self.clock.now())
                .await?;

            info!(candidate_id = %candidate_id, completed, "Onboarding state reconciled");
            Ok(completed)
        }
        .instrument(span)
        .await
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    candidate::CandidateSummary,
    ids::{CandidateId, UserId},
    ports::errors::QueryError,
};

#[async_trait]
pub trait CandidateRepositoryPort: Send + Sync {
    /// Look up the candidate linked to `user_id`.
    ///
    /// `Ok(None)` when there is none; more than one match is
    /// [`QueryError::AmbiguousResult`].
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CandidateSummary>, QueryError>;

    /// Write `onboarding_completed` and `updated_at` for the candidate with `id`.
    async fn set_onboarding_completed(
        &self,
        id: &CandidateId,
        completed: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), QueryError>;
}

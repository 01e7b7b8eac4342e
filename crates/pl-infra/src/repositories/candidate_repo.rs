use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pl_core::candidate::CandidateSummary;
use pl_core::ids::{CandidateId, UserId};
use pl_core::ports::{CandidateRepositoryPort, QueryError};

use crate::models::{CandidateFlagPatch, CandidateSummaryRow};
use crate::rest::RestClient;

pub const CANDIDATES_TABLE: &str = "candidates";

pub struct RestCandidateRepository {
    client: Arc<RestClient>,
}

impl RestCandidateRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CandidateRepositoryPort for RestCandidateRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CandidateSummary>, QueryError> {
        // Two rows are enough to detect a broken 1:1 link.
        let rows: Vec<CandidateSummaryRow> = self
            .client
            .table(CANDIDATES_TABLE)
            .eq("user_id", user_id)
            .limit(2)
            .select("id,onboarding_completed")
            .await?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Ok(None),
            (Some(row), None) => Ok(Some(row.into())),
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
        let patch = CandidateFlagPatch {
            onboarding_completed: completed,
            updated_at,
        };
        self.client
            .table(CANDIDATES_TABLE)
            .eq("id", id)
            .update(&patch)
            .await
    }
}

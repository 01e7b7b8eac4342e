use chrono::{DateTime, Utc};
use pl_core::candidate::CandidateSummary;
use pl_core::ids::CandidateId;
use serde::{Deserialize, Deserializer, Serialize};

/// `select=id,onboarding_completed` on `candidates`.
#[derive(Debug, Deserialize)]
pub struct CandidateSummaryRow {
    /// Opaque key; the store may use text/uuid or integer primary keys
    #[serde(deserialize_with = "key_as_string")]
    pub id: String,
    /// Nullable in the store; null reads as "not completed"
    pub onboarding_completed: Option<bool>,
}

impl From<CandidateSummaryRow> for CandidateSummary {
    fn from(row: CandidateSummaryRow) -> Self {
        Self {
            id: CandidateId::from(row.id),
            onboarding_completed: row.onboarding_completed.unwrap_or(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Number(serde_json::Number),
}

fn key_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(text) => text,
        RawKey::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct CandidateFlagPatch {
    pub onboarding_completed: bool,
    pub updated_at: DateTime<Utc>,
}

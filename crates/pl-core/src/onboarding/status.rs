use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// Status of one persisted onboarding step.
///
/// The store may hold values this crate does not know about (e.g.
/// `in_review`). They are preserved verbatim in [`StepStatus::Other`] and
/// are never treated as completed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepStatus {
    Pending,
    Completed,
    Other(String),
}

impl StepStatus {
    pub fn parse(raw: &str) -> Self {
        Self::from(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::Pending => STATUS_PENDING,
            StepStatus::Completed => STATUS_COMPLETED,
            StepStatus::Other(raw) => raw,
        }
    }

    /// Exact match on `completed`; case and whitespace are significant.
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }
}

impl Display for StepStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for StepStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            STATUS_PENDING => StepStatus::Pending,
            STATUS_COMPLETED => StepStatus::Completed,
            _ => StepStatus::Other(raw),
        }
    }
}

impl From<&str> for StepStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<StepStatus> for String {
    fn from(status: StepStatus) -> Self {
        match status {
            StepStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(StepStatus::parse("pending"), StepStatus::Pending);
        assert_eq!(StepStatus::parse("completed"), StepStatus::Completed);
    }

    #[test]
    fn test_unknown_values_are_preserved() {
        let status = StepStatus::parse("in_review");
        assert_eq!(status, StepStatus::Other("in_review".to_string()));
        assert_eq!(status.as_str(), "in_review");
        assert!(!status.is_completed());
    }

    #[test]
    fn test_only_exact_completed_counts() {
        assert!(StepStatus::parse("completed").is_completed());
        assert!(!StepStatus::parse("Completed").is_completed());
        assert!(!StepStatus::parse("completed ").is_completed());
        assert!(!StepStatus::parse("").is_completed());
    }

    #[test]
    fn test_serde_uses_raw_string() {
        let json = serde_json::to_string(&StepStatus::Other("in_review".into())).unwrap();
        assert_eq!(json, "\"in_review\"");

        let status: StepStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, StepStatus::Completed);
    }
}

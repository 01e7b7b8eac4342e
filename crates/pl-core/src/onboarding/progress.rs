//! Pure reconciliation decisions.
//!
//! No IO, no time: callers fetch records, hand them in, and act on the result.

use std::collections::HashSet;

use super::record::OnboardingStepRecord;
use super::status::StepStatus;
use super::step::{OnboardingStepDefinition, StepRegistry};

/// Outcome of evaluating a candidate's step statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionVerdict {
    /// No step records at all. Never counts as complete.
    NoRecords,
    /// At least one record is not exactly `completed`.
    Incomplete,
    Complete,
}

impl CompletionVerdict {
    pub fn is_complete(self) -> bool {
        matches!(self, CompletionVerdict::Complete)
    }
}

/// Registry steps without a record, in registry order.
pub fn missing_steps<'a>(
    registry: &'a StepRegistry,
    existing: &[OnboardingStepRecord],
) -> Vec<&'a OnboardingStepDefinition> {
    let present: HashSet<&str> = existing.iter().map(|r| r.step_name.as_str()).collect();
    registry
        .iter()
        .filter(|step| !present.contains(step.name.as_str()))
        .collect()
}

pub fn evaluate(statuses: &[StepStatus]) -> CompletionVerdict {
    if statuses.is_empty() {
        return CompletionVerdict::NoRecords;
    }
    if statuses.iter().any(|status| !status.is_completed()) {
        CompletionVerdict::Incomplete
    } else {
        CompletionVerdict::Complete
    }
}

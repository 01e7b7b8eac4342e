mod candidate_row;
mod onboarding_step_row;

pub use candidate_row::{CandidateFlagPatch, CandidateSummaryRow};
pub use onboarding_step_row::{NewOnboardingStepRow, OnboardingStepRow, StepStatusRow};

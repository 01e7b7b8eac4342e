mod candidate_repo;
mod onboarding_step_repo;

pub use candidate_repo::{RestCandidateRepository, CANDIDATES_TABLE};
pub use onboarding_step_repo::{RestOnboardingStepRepository, ONBOARDING_STEPS_TABLE};

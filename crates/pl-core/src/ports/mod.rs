//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! that talks to the remote data store. Use cases depend on these traits
//! only; `pl-infra` provides the implementations.

pub mod candidate_repository;
mod clock;
pub mod errors;
pub mod onboarding_step_repository;

pub use candidate_repository::CandidateRepositoryPort;
pub use clock::ClockPort;
pub use errors::QueryError;
pub use onboarding_step_repository::OnboardingStepRepositoryPort;

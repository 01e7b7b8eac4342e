//! Onboarding use cases
//!
//! Reconciles a candidate's persisted step records against the step registry
//! and derives the onboarding completion flag from them.

pub mod is_onboarding_complete;

pub use is_onboarding_complete::IsOnboardingComplete;

//! Onboarding step registry
//!
//! The registry is the canonical, ordered list of steps a candidate has to go
//! through. Order only matters for presentation; reconciliation treats the
//! registry as a set of names.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const STEP_BASIC_INFO: &str = "step1_basic_info";
pub const STEP_CAREER_INFO: &str = "step2_career_info";
pub const STEP_RESUME_UPLOAD: &str = "step3_resume_upload";
pub const STEP_PREFERENCE: &str = "step_preference";
pub const STEP_CONSENTS: &str = "step4_consents";

/// Symbolic view identifier for a step.
///
/// The presentation layer maps each variant to something renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepView {
    BasicInfo,
    CareerInfo,
    ResumeUpload,
    JobPreference,
    ConsentDefault,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStepDefinition {
    /// Stable key, matches `candidate_onboarding_steps.step_name`
    pub name: String,
    pub view: StepView,
}

impl OnboardingStepDefinition {
    pub fn new(name: impl Into<String>, view: StepView) -> Self {
        Self {
            name: name.into(),
            view,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate onboarding step name: {0}")]
    DuplicateStep(String),
}

/// Ordered, immutable sequence of onboarding steps with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRegistry {
    steps: Vec<OnboardingStepDefinition>,
}

impl StepRegistry {
    pub fn new(steps: Vec<OnboardingStepDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(steps.len());
        for step in &steps {
            if !seen.insert(step.name.as_str()) {
                return Err(RegistryError::DuplicateStep(step.name.clone()));
            }
        }
        Ok(Self { steps })
    }

    /// The production wizard.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                OnboardingStepDefinition::new(STEP_BASIC_INFO, StepView::BasicInfo),
                OnboardingStepDefinition::new(STEP_CAREER_INFO, StepView::CareerInfo),
                OnboardingStepDefinition::new(STEP_RESUME_UPLOAD, StepView::ResumeUpload),
                OnboardingStepDefinition::new(STEP_PREFERENCE, StepView::JobPreference),
                OnboardingStepDefinition::new(STEP_CONSENTS, StepView::ConsentDefault),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OnboardingStepDefinition> {
        self.steps.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&OnboardingStepDefinition> {
        self.steps.iter().find(|step| step.name == name)
    }

    /// Zero-based wizard position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.name == name)
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a StepRegistry {
    type Item = &'a OnboardingStepDefinition;
    type IntoIter = std::slice::Iter<'a, OnboardingStepDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

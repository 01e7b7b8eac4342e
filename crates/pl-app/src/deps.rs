//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for App construction.
//! 此模块定义 App 构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use pl_core::ports::*;
use pl_core::StepRegistry;

use crate::usecases::IsOnboardingComplete;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Store dependencies / 存储依赖
    pub candidate_repo: Arc<dyn CandidateRepositoryPort>,
    pub onboarding_step_repo: Arc<dyn OnboardingStepRepositoryPort>,

    // Onboarding dependencies / 入门引导依赖
    pub step_registry: Arc<StepRegistry>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}

/// The assembled application; hands out use cases wired to its dependencies.
pub struct App {
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn is_onboarding_complete(&self) -> IsOnboardingComplete {
        IsOnboardingComplete::new(
            self.deps.candidate_repo.clone(),
            self.deps.onboarding_step_repo.clone(),
            self.deps.clock.clone(),
            self.deps.step_registry.clone(),
        )
    }
}

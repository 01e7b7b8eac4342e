//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (REST client, repositories, clock)
//!   / 创建 infra 层具体实现
//! - ✅ Inject all dependencies into AppDeps / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide whether a candidate is onboarded
//! - 不判断候选人是否完成入门引导
//!
//! ## Architecture Principle / 架构原则
//!
//! > **This is the only place allowed to depend on pl-infra + pl-app simultaneously.**
//! > **这是唯一允许同时依赖 pl-infra 和 pl-app 的地方。**

use std::sync::Arc;
use std::time::Duration;

use pl_app::AppDeps;
use pl_core::config::{AppConfig, HttpConfig};
use pl_core::StepRegistry;
use pl_infra::{RestCandidateRepository, RestClient, RestOnboardingStepRepository, SystemClock};
use tracing::info;

/// Used when `http.timeout_secs` is unset (0).
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Store configuration missing: {0}")]
    MissingStoreConfig(String),

    #[error("Store client initialization failed: {0}")]
    StoreClientInit(String),
}

/// Resolve the request timeout from config
/// 从配置解析请求超时
pub fn http_timeout(http: &HttpConfig) -> Duration {
    if http.timeout_secs == 0 {
        DEFAULT_HTTP_TIMEOUT
    } else {
        Duration::from_secs(http.timeout_secs)
    }
}

/// Create the shared REST client for the remote store
/// 创建远程存储的共享 REST 客户端
///
/// # Errors / 错误
///
/// - `MissingStoreConfig` if the URL or the access key is empty
/// - `StoreClientInit` if the HTTP client cannot be built
pub fn create_rest_client(config: &AppConfig) -> WiringResult<Arc<RestClient>> {
    if config.store.url.trim().is_empty() {
        return Err(WiringError::MissingStoreConfig("store.url is empty".to_string()));
    }
    if config.store.anon_key.trim().is_empty() {
        return Err(WiringError::MissingStoreConfig(
            "store.anon_key is empty".to_string(),
        ));
    }

    let client = RestClient::new(&config.store, http_timeout(&config.http))
        .map_err(|e| WiringError::StoreClientInit(e.to_string()))?;
    Ok(Arc::new(client))
}

/// Wire all dependencies together
/// 将所有依赖连接在一起
///
/// # Errors / 错误
///
/// Returns `WiringError` if any infrastructure component fails to initialize.
/// 如果任何基础设施组件初始化失败，返回 `WiringError`。
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let client = create_rest_client(config)?;
    info!(
        store_url = %config.store.url,
        timeout_secs = http_timeout(&config.http).as_secs(),
        "Store client initialized"
    );

    Ok(AppDeps {
        candidate_repo: Arc::new(RestCandidateRepository::new(client.clone())),
        onboarding_step_repo: Arc::new(RestOnboardingStepRepository::new(client)),
        step_registry: Arc::new(StepRegistry::standard()),
        clock: Arc::new(SystemClock),
    })
}

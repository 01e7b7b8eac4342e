//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//! > Empty values are facts; the wiring layer decides whether they are fatal.

use serde::{Deserialize, Serialize};

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub http: HttpConfig,
}

/// Remote data store endpoint and credential.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://xyz.supabase.co` (may be empty)
    pub url: String,
    /// Anonymous/public access key (may be empty)
    pub anon_key: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key", &if self.anon_key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds; 0 means "not set"
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: no validation or default value logic here.
    /// Missing keys become empty strings / zero.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            store: StoreConfig {
                url: str_at("store", "url"),
                anon_key: str_at("store", "anon_key"),
            },
            http: HttpConfig {
                timeout_secs: toml_value
                    .get("http")
                    .and_then(|h| h.get("timeout_secs"))
                    .and_then(|v| v.as_integer())
                    .map(|v| v.max(0) as u64)
                    .unwrap_or(0),
            },
        })
    }
}

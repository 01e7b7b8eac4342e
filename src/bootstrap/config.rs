//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Apply environment overrides / 应用环境变量覆盖
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Whether an empty store URL is fatal is decided in `wiring.rs`.
//! 空的存储 URL 是否致命由 `wiring.rs` 决定。

use anyhow::Context;
use pl_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// Store base URL override / 存储基础 URL 覆盖
pub const ENV_STORE_URL: &str = "SUPABASE_URL";
/// Store access key override / 存储访问密钥覆盖
pub const ENV_STORE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
/// HTTP timeout override in seconds / HTTP 超时覆盖（秒）
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PLACEMENT_HTTP_TIMEOUT_SECS";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**:
/// - Empty strings are valid (they are facts)
/// - Missing sections result in empty values (facts)
/// **不执行任何验证**：
/// - 空字符串是合法的（它们是事实）
/// - 缺失的部分导致空值（事实）
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error) / 无法读取文件
/// - Content is not valid TOML (parse error) / 内容不是有效的 TOML
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the given config file (if any), then layer environment overrides on top.
/// 加载给定的配置文件（如有），然后叠加环境变量覆盖。
///
/// `None` means the store settings come entirely from the environment. A
/// path that is given must be readable.
pub fn load_config_with_env(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path.to_path_buf())?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overwrite config values with any non-empty environment variables.
/// 使用非空的环境变量覆盖配置值。
pub fn apply_env_overrides(config: &mut AppConfig) -> anyhow::Result<()> {
    if let Some(url) = non_empty_env(ENV_STORE_URL) {
        config.store.url = url;
    }
    if let Some(key) = non_empty_env(ENV_STORE_ANON_KEY) {
        config.store.anon_key = key;
    }
    if let Some(raw) = non_empty_env(ENV_HTTP_TIMEOUT_SECS) {
        config.http.timeout_secs = raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a number: {:?}", ENV_HTTP_TIMEOUT_SECS, raw))?;
    }
    Ok(())
}

/// Load `.env` from the working directory or its parents.
/// 加载 `.env` 文件（当前目录或其父目录）。
///
/// A missing file is fine; a malformed one is returned so the caller can
/// report it. Variables already set in the environment are never replaced.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Same as [`load_dotenv`] for an explicit file. Returns whether it was loaded.
pub fn load_dotenv_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if is_not_found(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

fn is_not_found(error: &dotenvy::Error) -> bool {
    matches!(error, dotenvy::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    fn clear_env() {
        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_ANON_KEY);
        std::env::remove_var(ENV_HTTP_TIMEOUT_SECS);
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [store]
            url = "https://example.supabase.co"
            anon_key = "anon"

            [http]
            timeout_secs = 10
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.store.url, "https://example.supabase.co");
        assert_eq!(config.store.anon_key, "anon");
        assert_eq!(config.http.timeout_secs, 10);
    }

    /// Test that missing values result in empty values
    /// 测试缺失的值导致空值
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config("[store]\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = write_config("[store\nurl = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let result = load_config(PathBuf::from("/nonexistent/placement/config.toml"));

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_values() {
        clear_env();
        let temp_file = write_config(
            r#"
            [store]
            url = "https://file.example"
            anon_key = "file-key"
        "#,
        );
        std::env::set_var(ENV_STORE_URL, "https://env.example");
        std::env::set_var(ENV_HTTP_TIMEOUT_SECS, "7");

        let config = load_config_with_env(Some(temp_file.path())).unwrap();
        clear_env();

        assert_eq!(config.store.url, "https://env.example");
        assert_eq!(config.store.anon_key, "file-key");
        assert_eq!(config.http.timeout_secs, 7);
    }

    #[test]
    #[serial]
    fn test_no_file_reads_environment_only() {
        clear_env();
        std::env::set_var(ENV_STORE_URL, "https://env.example");
        std::env::set_var(ENV_STORE_ANON_KEY, "env-key");

        let config = load_config_with_env(None).unwrap();
        clear_env();

        assert_eq!(config.store.url, "https://env.example");
        assert_eq!(config.store.anon_key, "env-key");
        assert_eq!(config.http.timeout_secs, 0);
    }

    #[test]
    #[serial]
    fn test_given_missing_file_is_error_even_with_environment() {
        clear_env();
        std::env::set_var(ENV_STORE_URL, "https://env.example");
        std::env::set_var(ENV_STORE_ANON_KEY, "env-key");

        let result = load_config_with_env(Some(Path::new("/nonexistent/placement/config.toml")));
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    #[serial]
    fn test_empty_env_values_do_not_override() {
        clear_env();
        let temp_file = write_config("[store]\nurl = \"https://file.example\"\n");
        std::env::set_var(ENV_STORE_URL, "");

        let config = load_config_with_env(Some(temp_file.path())).unwrap();
        clear_env();

        assert_eq!(config.store.url, "https://file.example");
    }

    #[test]
    fn test_missing_dotenv_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_dotenv_file(&dir.path().join(".env")).unwrap();
        assert!(!loaded);
    }

    #[test]
    fn test_malformed_dotenv_file_is_reported() {
        let temp_file = write_config("not a valid line\n");
        assert!(load_dotenv_file(temp_file.path()).is_err());
    }

    #[test]
    #[serial]
    fn test_dotenv_file_sets_unset_variables_only() {
        clear_env();
        std::env::set_var(ENV_STORE_ANON_KEY, "from-env");
        let temp_file = write_config(
            "SUPABASE_URL=https://dotenv.example\nSUPABASE_ANON_KEY=from-dotenv\n",
        );

        let loaded = load_dotenv_file(temp_file.path()).unwrap();
        let url = std::env::var(ENV_STORE_URL).ok();
        let key = std::env::var(ENV_STORE_ANON_KEY).ok();
        clear_env();

        assert!(loaded);
        assert_eq!(url.as_deref(), Some("https://dotenv.example"));
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    #[serial]
    fn test_non_numeric_timeout_is_error() {
        clear_env();
        std::env::set_var(ENV_HTTP_TIMEOUT_SECS, "soon");

        let result = load_config_with_env(None);
        clear_env();

        assert!(result.is_err());
    }
}

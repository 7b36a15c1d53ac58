use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppResult, ConfigError};

/// 题目接口的实现方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// 通过 HTTP 调用 `/api/questions`
    Http,
    /// 进程内的题目集合（演示和测试用）
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Backend::Http),
            "memory" => Ok(Backend::Memory),
            other => Err(ConfigError::UnknownBackend {
                value: other.to_string(),
            }),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端地址（不含 `/api/questions`）
    pub api_base_url: String,
    /// 通知自动消失的秒数
    pub notification_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 题目接口的实现方式
    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            notification_timeout_secs: 6,
            verbose_logging: false,
            backend: Backend::Http,
        }
    }
}

/// 未指定配置文件时使用的文件名
pub const DEFAULT_CONFIG_FILE: &str = "question_manager.toml";

impl Config {
    /// 只从环境变量读取配置，缺失或无法解析的值使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取 TOML 配置文件（如果存在），再用环境变量覆盖
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(path) if path.exists() => Self::from_toml_file(path)?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 读取指定的配置文件（必须存在），再用环境变量覆盖
    pub fn load_from(path: &Path) -> AppResult<Self> {
        Ok(Self::from_toml_file(path)?.with_env_overrides())
    }

    /// 按启动参数解析配置
    ///
    /// 显式指定的文件不存在时报错；未指定时读取当前目录的
    /// `question_manager.toml`，不存在则使用默认值。
    pub fn resolve(explicit: Option<PathBuf>) -> AppResult<Self> {
        match explicit {
            Some(path) => Self::load_from(&path),
            None => Self::load(Some(Path::new(DEFAULT_CONFIG_FILE))),
        }
    }

    /// 从 TOML 文件读取配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;
        Ok(config)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("QUESTION_API_BASE_URL").unwrap_or(self.api_base_url),
            notification_timeout_secs: std::env::var("NOTIFICATION_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.notification_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            backend: std::env::var("QUESTION_BACKEND").ok().and_then(|v| v.parse().ok()).unwrap_or(self.backend),
        }
    }

    /// 通知自动消失的时长
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    /// 题目集合的完整地址
    pub fn questions_url(&self) -> String {
        format!("{}/api/questions", self.api_base_url.trim_end_matches('/'))
    }
}

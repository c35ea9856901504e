//! 运行时配置
//!
//! 所有值都有默认值；外部只需提供一个查找函数（构建期环境变量、测试中的 map 等），
//! 找不到的键回退到默认值，格式错误则返回 [`ConfigError`]。

use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

use crate::error::ConfigError;

pub const DEFAULT_SESSION_KEY: &str = "userId";
pub const DEFAULT_TOAST_LIMIT: usize = 3;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

pub const VAR_SESSION_KEY: &str = "SERENOVA_SESSION_KEY";
pub const VAR_TOAST_LIMIT: &str = "SERENOVA_TOAST_LIMIT";
pub const VAR_TOAST_DURATION_MS: &str = "SERENOVA_TOAST_DURATION_MS";
pub const VAR_LOG_LEVEL: &str = "SERENOVA_LOG_LEVEL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 会话标识在本地存储中的键
    pub session_key: String,
    /// 同时显示的通知上限
    pub toast_limit: usize,
    /// 通知自动消失时间
    pub toast_duration: Duration,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            toast_limit: DEFAULT_TOAST_LIMIT,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// 通过查找函数构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_key = match lookup(VAR_SESSION_KEY) {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::invalid(VAR_SESSION_KEY, key, "must not be empty"));
            }
            Some(key) => key.trim().to_string(),
            None => defaults.session_key,
        };

        let toast_limit = parse_or(&lookup, VAR_TOAST_LIMIT, defaults.toast_limit)?;
        if toast_limit == 0 {
            return Err(ConfigError::invalid(VAR_TOAST_LIMIT, "0", "must be at least 1"));
        }

        let toast_duration = Duration::from_millis(parse_or(
            &lookup,
            VAR_TOAST_DURATION_MS,
            DEFAULT_TOAST_DURATION_MS,
        )?);

        let log_level = parse_or(&lookup, VAR_LOG_LEVEL, defaults.log_level)?;

        Ok(Self {
            session_key,
            toast_limit,
            toast_duration,
            log_level,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session_key, "userId");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (VAR_SESSION_KEY, "sid"),
            (VAR_TOAST_LIMIT, "5"),
            (VAR_TOAST_DURATION_MS, "1500"),
            (VAR_LOG_LEVEL, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.session_key, "sid");
        assert_eq!(config.toast_limit, 5);
        assert_eq!(config.toast_duration, Duration::from_millis(1500));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(VAR_TOAST_LIMIT, "many")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: VAR_TOAST_LIMIT, .. }
        ));

        assert!(AppConfig::from_lookup(lookup(&[(VAR_TOAST_LIMIT, "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(VAR_SESSION_KEY, "  ")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(VAR_LOG_LEVEL, "loud")])).is_err());
    }
}

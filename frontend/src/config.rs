//! 构建期配置
//!
//! wasm 中没有进程环境变量，配置在编译时通过 `option_env!` 固化进产物。

use serenova_shared::config::{VAR_LOG_LEVEL, VAR_SESSION_KEY, VAR_TOAST_DURATION_MS, VAR_TOAST_LIMIT};
use serenova_shared::{AppConfig, ConfigError};

use crate::web::init_logging;

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        VAR_SESSION_KEY => option_env!("SERENOVA_SESSION_KEY"),
        VAR_TOAST_LIMIT => option_env!("SERENOVA_TOAST_LIMIT"),
        VAR_TOAST_DURATION_MS => option_env!("SERENOVA_TOAST_DURATION_MS"),
        VAR_LOG_LEVEL => option_env!("SERENOVA_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn load() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(build_env)
}

/// 读取配置并安装日志
///
/// 配置非法时回退到默认值，错误在日志就绪后输出。
pub fn init() -> AppConfig {
    let (config, error) = match load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(config.log_level);
    if let Some(e) = error {
        tracing::warn!(error = %e, "invalid build configuration, falling back to defaults");
    }
    tracing::info!(
        session_key = %config.session_key,
        toast_limit = config.toast_limit,
        "configuration loaded"
    );
    config
}

use thiserror::Error;

use crate::notify::Notice;
use crate::validation::ErrorMap;

// =========================================================
// 表单提交错误
// =========================================================

/// 表单提交失败的原因
///
/// 两类错误都可以由用户修改输入后重新提交来恢复。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 字段级错误，在输入框旁内联显示
    #[error("{} field(s) failed validation", .0.error_count())]
    InvalidFields(ErrorMap),
    /// 表单级缺失信息，以错误通知的形式弹出
    #[error("missing information: {description}")]
    MissingInformation { description: &'static str },
}

impl SubmitError {
    pub const MISSING_TITLE: &'static str = "Missing information";

    pub fn missing(description: &'static str) -> Self {
        Self::MissingInformation { description }
    }

    /// 字段错误表（仅 `InvalidFields`）
    pub fn field_errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::InvalidFields(errors) => Some(errors),
            Self::MissingInformation { .. } => None,
        }
    }

    /// 需要弹出的通知；字段错误不弹通知
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::InvalidFields(_) => None,
            Self::MissingInformation { description } => {
                Some(Notice::destructive(Self::MISSING_TITLE, *description))
            }
        }
    }
}

// =========================================================
// 配置错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

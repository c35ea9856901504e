//! 声明式表单校验
//!
//! 每个表单只需要提供一张 `{字段, 检查, 消息}` 规则表，
//! 由 [`validate`] 统一求值：
//! - 按规则表顺序执行，不同字段之间不短路，所有字段都会被检查；
//! - 同一字段上第一条失败的规则生效，后续规则跳过；
//! - 结果是完整重算的 [`ErrorMap`]，没有其它副作用。

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

// =========================================================
// 规则定义
// =========================================================

/// 单个字段检查
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// 空串或纯空白视为缺失
    Required,
    /// `non-space@non-space.non-space`
    Email,
    /// 最少长度，按 UTF-16 码元计数（与浏览器输入框的 `length` 一致）
    MinLength(usize),
    /// 必须与另一字段完全相同
    SameAs(&'static str),
    /// 去掉非数字字符后的位数，闭区间；空值直接通过
    DigitCount { min: usize, max: usize },
}

impl Check {
    /// 对单个取值执行检查
    ///
    /// `lookup` 用于 `SameAs` 读取其它字段。
    pub fn passes<'a>(&self, value: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> bool {
        match *self {
            Check::Required => !is_blank(value),
            Check::Email => is_valid_email(value),
            Check::MinLength(min) => value.encode_utf16().count() >= min,
            Check::SameAs(other) => value == lookup(other).unwrap_or_default(),
            Check::DigitCount { min, max } => {
                is_blank(value) || (min..=max).contains(&digit_count(value))
            }
        }
    }
}

/// 规则表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// 可以被规则引擎读取的表单
pub trait FormValues {
    /// 表单全部字段名，也是错误表的键集合
    const FIELDS: &'static [&'static str];

    /// 读取文本字段；非文本字段或未知字段返回 `None`
    fn value(&self, field: &str) -> Option<&str>;
}

// =========================================================
// 错误表
// =========================================================

/// 字段 -> 错误消息，空串表示该字段合法
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(&'static str, String)>,
}

impl ErrorMap {
    /// 为给定字段创建全空的错误表
    pub fn for_fields(fields: &[&'static str]) -> Self {
        Self {
            entries: fields.iter().map(|f| (*f, String::new())).collect(),
        }
    }

    /// 设置字段错误；字段不在表中时忽略并返回 `false`
    pub fn set(&mut self, field: &str, message: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => {
                *slot = message.into();
                true
            }
            None => false,
        }
    }

    /// 获取字段的错误消息（合法时为 `None`）
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, msg)| *f == field && !msg.is_empty())
            .map(|(_, msg)| msg.as_str())
    }

    /// 便于直接渲染：合法字段返回空串
    pub fn message(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// 所有字段都合法时才允许提交
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, msg)| msg.is_empty())
    }

    /// 只包含失败字段
    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(f, msg)| (*f, msg.as_str()))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

// =========================================================
// 规则引擎
// =========================================================

/// 执行规则表，返回完整的错误表
pub fn validate<F: FormValues>(form: &F, rules: &[Rule]) -> ErrorMap {
    let mut errors = ErrorMap::for_fields(F::FIELDS);

    for rule in rules {
        debug_assert!(
            F::FIELDS.contains(&rule.field),
            "rule targets unknown field `{}`",
            rule.field
        );
        if errors.has_error(rule.field) {
            continue;
        }
        let value = form.value(rule.field).unwrap_or_default();
        if !rule.check.passes(value, |other| form.value(other)) {
            errors.set(rule.field, rule.message);
        }
    }

    tracing::debug!(
        failed = errors.error_count(),
        checked = rules.len(),
        "form validated"
    );
    errors
}

/// 多字段存在性检查：所有字段都非空才通过
pub fn all_present<F: FormValues>(form: &F, fields: &[&str]) -> bool {
    fields
        .iter()
        .all(|f| !is_blank(form.value(f).unwrap_or_default()))
}

// =========================================================
// 基础判断
// =========================================================

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// 去掉所有非数字字符后的位数
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests;

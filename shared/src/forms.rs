//! 表单记录
//!
//! 每个页面的表单都是一个普通结构体，实现 [`FormValues`] 供规则引擎读取，
//! 再实现 [`Form`] 声明规则表、表单级检查和提交成功后的结果。
//! 表单本身不做导航、不弹通知，这些由页面根据 [`Submitted`] 完成。

mod account;
mod community;
mod profile;
mod route_plan;

pub use account::{LoginForm, RegisterForm};
pub use community::{IncidentReportForm, IncidentType, RouteRatingForm, StoryForm};
pub use profile::{ContactForm, PasswordForm};
pub use route_plan::RoutePlanForm;

use crate::error::SubmitError;
use crate::notify::Notice;
use crate::route::AppRoute;
use crate::validation::{FormValues, Rule, all_present, validate};

/// 为纯文本表单生成 `FormValues` 实现
macro_rules! text_form {
    ($form:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        impl $crate::validation::FormValues for $form {
            const FIELDS: &'static [&'static str] = &[$($name),+];

            fn value(&self, field: &str) -> Option<&str> {
                match field {
                    $($name => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }
    };
}
pub(crate) use text_form;

/// 提交成功后页面要执行的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterSubmit {
    /// 写入会话并跳转
    SignIn { user_id: String, redirect: AppRoute },
    /// 清空表单
    Reset,
    /// 关闭内联面板
    Close,
    ResetAndClose,
    /// 展示路线摘要
    ShowRoute,
}

/// 提交成功的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub notice: Notice,
    pub then: AfterSubmit,
}

impl Submitted {
    pub fn new(title: &str, description: &str, then: AfterSubmit) -> Self {
        Self {
            notice: Notice::new(title, description),
            then,
        }
    }
}

pub trait Form: FormValues + Default {
    /// 字段级规则表
    const RULES: &'static [Rule] = &[];

    /// 提交前检查；默认只跑规则表
    fn check(&self) -> Result<(), SubmitError> {
        let errors = validate(self, Self::RULES);
        if errors.is_valid() {
            Ok(())
        } else {
            Err(SubmitError::InvalidFields(errors))
        }
    }

    /// 检查通过后的结果
    fn succeeded(&self) -> Submitted;

    /// 校验并提交；失败时表单状态保持不变
    fn submit(&self) -> Result<Submitted, SubmitError> {
        self.check()
            .inspect_err(|e| tracing::debug!(error = %e, "submission blocked"))?;
        Ok(self.succeeded())
    }

    /// 执行与表单自身状态相关的后续动作
    fn apply(&mut self, then: &AfterSubmit) {
        if matches!(then, AfterSubmit::Reset | AfterSubmit::ResetAndClose) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 表单级存在性检查，失败时给出统一的缺失信息错误
pub(crate) fn require_present<F: FormValues>(
    form: &F,
    fields: &[&str],
    description: &'static str,
) -> Result<(), SubmitError> {
    if all_present(form, fields) {
        Ok(())
    } else {
        Err(SubmitError::missing(description))
    }
}

#[cfg(test)]
mod tests;

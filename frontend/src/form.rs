//! 表单与信号的粘合层
//!
//! 所有页面的提交流程都相同：校验 -> 写错误表 / 弹通知 -> 应用后续动作。
//! 页面只需处理与自身 UI 相关的动作（跳转、关闭面板）。

use leptos::prelude::*;
use serenova_shared::{AfterSubmit, ErrorMap, Form};

use crate::auth::AuthContext;
use crate::toast::ToastContext;
use crate::web::router::RouterService;

/// 表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
pub struct FormState<F: Send + Sync + 'static> {
    pub values: RwSignal<F>,
    pub errors: RwSignal<ErrorMap>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F> FormState<F>
where
    F: Form + Send + Sync + 'static,
{
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(F::default()),
            errors: RwSignal::new(ErrorMap::for_fields(F::FIELDS)),
        }
    }

    /// 按字段名读取文本值
    pub fn value(&self, field: &'static str) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|f| f.value(field).unwrap_or_default().to_string()))
    }

    /// 字段错误消息，合法时为空串
    pub fn error(&self, field: &'static str) -> Signal<String> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.message(field)))
    }

    /// 修改表单
    pub fn edit(&self, f: impl FnOnce(&mut F)) {
        self.values.update(f);
    }

    /// 校验并提交
    ///
    /// 成功时弹出成功通知并应用表单自身的后续动作，返回动作供页面继续处理；
    /// 失败时只更新错误表或弹出错误通知，表单内容保持不变。
    pub fn submit(&self, toasts: ToastContext) -> Option<AfterSubmit> {
        match self.values.with_untracked(|f| f.submit()) {
            Ok(done) => {
                self.errors.set(ErrorMap::for_fields(F::FIELDS));
                toasts.toast(done.notice);
                self.values.update(|f| f.apply(&done.then));
                Some(done.then)
            }
            Err(err) => {
                let errors = err
                    .field_errors()
                    .cloned()
                    .unwrap_or_else(|| ErrorMap::for_fields(F::FIELDS));
                self.errors.set(errors);
                if let Some(notice) = err.notice() {
                    toasts.toast(notice);
                }
                None
            }
        }
    }
}

impl<F> Default for FormState<F>
where
    F: Form + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// 登录 / 注册成功后的统一处理：写会话并跳转
pub fn finish_sign_in(then: AfterSubmit, auth: AuthContext, router: RouterService) {
    if let AfterSubmit::SignIn { user_id, redirect } = then {
        auth.sign_in(&user_id);
        router.navigate_to(redirect);
    }
}

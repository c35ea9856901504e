//! 认证模块
//!
//! 管理用户会话，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! 会话的状态迁移全部由 `serenova_shared::Session` 定义，
//! 这里只负责把它放进信号并接上 LocalStorage。

use crate::web::LocalStorage;
use leptos::prelude::*;
use serenova_shared::Session;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    /// LocalStorage 中保存用户标识的键
    session_key: StoredValue<String>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 恢复会话
    pub fn new(session_key: String) -> Self {
        let session = Session::restore(&LocalStorage, &session_key);
        let (session, set_session) = signal(session);
        Self {
            session,
            set_session,
            session_key: StoredValue::new(session_key),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    /// 登录 / 注册成功后写入会话
    pub fn sign_in(&self, user_id: &str) {
        self.session_key.with_value(|key| {
            self.set_session
                .update(|session| session.sign_in(&LocalStorage, key, user_id));
        });
    }

    /// 注销并清除会话
    ///
    /// 如果当前位于受保护页面，路由服务会监听到状态变化并自动重定向。
    pub fn sign_out(&self) {
        self.session_key.with_value(|key| {
            self.set_session
                .update(|session| session.sign_out(&LocalStorage, key));
        });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

//! 会话状态模块
//!
//! 会话只有一个标志：本地存储中是否存在用户标识。
//! 这里把它建模为显式的状态对象，定义了初始化和状态迁移：
//! - `restore`: 从存储恢复（不存在则为未认证）
//! - `sign_in`: 登录/注册成功 -> 已认证，写入标识
//! - `sign_out`: 注销 -> 未认证，清除标识
//!
//! 真正的存储后端由调用方通过 [`SessionStore`] 注入。

/// 键值存储抽象
///
/// 浏览器端由 LocalStorage 实现，测试中使用内存实现。
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 写入成功返回 `true`
    fn set(&self, key: &str, value: &str) -> bool;
    /// 删除成功返回 `true`
    fn delete(&self, key: &str) -> bool;
}

/// 会话状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    /// 从存储中恢复会话
    ///
    /// 只要键存在（任意值）就视为已认证。
    pub fn restore(store: &impl SessionStore, key: &str) -> Self {
        let user_id = store.get(key);
        tracing::debug!(key, authenticated = user_id.is_some(), "session restored");
        Self { user_id }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// 登录成功：写入用户标识
    ///
    /// 即使存储写入失败，内存中的会话依然生效，刷新页面后才会丢失。
    pub fn sign_in(&mut self, store: &impl SessionStore, key: &str, user_id: &str) {
        let user_id = user_id.trim();
        if !store.set(key, user_id) {
            tracing::warn!(key, "failed to persist session identifier");
        }
        tracing::info!(user_id, "signed in");
        self.user_id = Some(user_id.to_string());
    }

    /// 注销：清除用户标识
    pub fn sign_out(&mut self, store: &impl SessionStore, key: &str) {
        if !store.delete(key) {
            tracing::warn!(key, "failed to clear session identifier");
        }
        tracing::info!("signed out");
        self.user_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// 内存存储，单线程场景使用
    #[derive(Debug, Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self::default()
        }
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn delete(&self, key: &str) -> bool {
            self.items.borrow_mut().remove(key);
            true
        }
    }

    const KEY: &str = "userId";

    #[test]
    fn test_restore_empty_store_is_signed_out() {
        let store = MemoryStore::new();
        let session = Session::restore(&store, KEY);
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_any_stored_value_counts_as_authenticated() {
        let store = MemoryStore::new();
        store.set(KEY, "");
        assert!(Session::restore(&store, KEY).is_authenticated());
    }

    #[test]
    fn test_sign_in_persists_identifier() {
        let store = MemoryStore::new();
        let mut session = Session::restore(&store, KEY);

        session.sign_in(&store, KEY, "  jessica@example.com ");

        assert!(session.is_authenticated());
        assert_eq!(store.get(KEY).as_deref(), Some("jessica@example.com"));
        // 新页面加载时能恢复
        assert!(Session::restore(&store, KEY).is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_identifier() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session.sign_in(&store, KEY, "a@b.co");

        session.sign_out(&store, KEY);

        assert!(!session.is_authenticated());
        assert_eq!(store.get(KEY), None);
        assert!(!Session::restore(&store, KEY).is_authenticated());
    }

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> bool {
            false
        }
        fn delete(&self, _key: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_sign_in_survives_storage_failure() {
        let mut session = Session::default();
        session.sign_in(&ReadOnlyStore, KEY, "a@b.co");
        assert!(session.is_authenticated());
    }
}

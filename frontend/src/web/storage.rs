//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`，作为会话状态的存储后端。

use serenova_shared::SessionStore;

/// 浏览器 LocalStorage
///
/// 任何 JS 异常都被视为"键不存在 / 写入失败"，不会向上抛出。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window()?.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable");
        }
        storage
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

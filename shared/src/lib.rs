//! Serenova 共享领域层
//!
//! 不依赖 DOM，前端只负责把这里的纯逻辑接到信号和视图上：
//! - `route`: 路由定义与守卫
//! - `session`: 会话状态及其迁移
//! - `validation` / `forms`: 声明式表单校验与各页面表单
//! - `notify`: 通知队列
//! - `content` / `planner`: 静态内容与路线占位摘要

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod notify;
pub mod planner;
pub mod route;
pub mod session;
pub mod validation;

pub use config::AppConfig;
pub use error::{ConfigError, SubmitError};
pub use forms::{AfterSubmit, Form, Submitted};
pub use notify::{Notice, Notification, ToastQueue, Variant};
pub use route::{AppRoute, NAV_ITEMS, NavItem, Resolution};
pub use session::{Session, SessionStore};
pub use validation::ErrorMap;

//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，
//! 验证部分完全委托给 `AppRoute::resolve`。

use leptos::prelude::*;
use serenova_shared::{AppRoute, Resolution};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 首次渲染前就执行守卫，受保护页面不会闪现。
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let resolution = AppRoute::resolve(&path, is_authenticated.get_untracked());
        if let Resolution::Redirect(target) = resolution {
            replace_history_state(target.to_path());
        }
        let (current_route, set_route) = signal(resolution.route());

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        let is_auth = self.is_authenticated.get_untracked();
        let resolution = AppRoute::resolve(path, is_auth);
        self.apply(path, resolution, true);
    }

    /// 导航到指定路由
    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate(route.to_path());
    }

    /// 按守卫结果更新 History 与当前路由
    ///
    /// # Arguments
    /// * `path` - 请求的原始路径（NotFound 时保留在地址栏）
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn apply(&self, path: &str, resolution: Resolution, use_push: bool) {
        let target_path = match resolution {
            Resolution::Redirect(route) => route.to_path(),
            Resolution::Render(_) => path,
        };

        if use_push {
            push_history_state(target_path);
        } else {
            replace_history_state(target_path);
        }

        tracing::debug!(requested = path, resolved = %resolution.route(), "navigated");
        self.set_route.set(resolution.route());
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let resolution = AppRoute::resolve(&path, router.is_authenticated.get_untracked());
            // popstate 时浏览器已经切换了地址，只在重定向时改写
            if let Resolution::Redirect(target) = resolution {
                replace_history_state(target.to_path());
            }
            router.set_route.set(resolution.route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let router = *self;

        // 使用 Effect 监听认证状态变化
        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = current_route.get_untracked();

            // 用户登出，如果在受保护页面则重定向到登录
            let resolution = route.guard(is_auth);
            if resolution.is_redirect() {
                tracing::info!(from = %route, "session ended, leaving protected page");
                router.apply(route.to_path(), resolution, false);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时走路由服务而不是整页刷新
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional)] class: &'static str,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}

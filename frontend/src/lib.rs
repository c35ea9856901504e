//! Serenova 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），路由定义在 `serenova_shared::route`
//! - `auth`: 认证状态管理
//! - `toast`: 通知队列与自动过期
//! - `form`: 表单状态与提交流程
//! - `components` / `pages`: UI 层

mod auth;
mod config;
mod form;
mod toast;

mod components {
    pub mod controls;
    pub mod layout;
    pub mod safety_map;
    pub mod story_card;
    pub mod toaster;
}

mod pages {
    pub mod crime_data;
    pub mod dashboard;
    pub mod emergency;
    pub mod landing;
    pub mod login;
    pub mod not_found;
    pub mod profile;
    pub mod rate_route;
    pub mod register;
    pub mod report_incident;
    pub mod route_planner;
    pub mod survivor_blog;
}

// 原生 Web API 封装模块
// 提供对浏览器原生 API 的轻量级封装：History 路由、LocalStorage 以及控制台日志输出。
pub(crate) mod web {
    mod console;
    pub mod router;
    mod storage;

    pub use console::init_logging;
    pub use storage::LocalStorage;
}

use leptos::prelude::*;
use serenova_shared::AppRoute;

use crate::auth::AuthContext;
use crate::components::toaster::Toaster;
use crate::pages::crime_data::CrimeDataPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::emergency::EmergencyPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::rate_route::RateRoutePage;
use crate::pages::register::RegisterPage;
use crate::pages::report_incident::ReportIncidentPage;
use crate::pages::route_planner::RoutePlannerPage;
use crate::pages::survivor_blog::SurvivorBlogPage;
use crate::toast::ToastContext;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::PublicRoutePlanner => view! { <RoutePlannerPage public=true /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Emergency => view! { <EmergencyPage /> }.into_any(),
        AppRoute::CrimeData => view! { <CrimeDataPage /> }.into_any(),
        AppRoute::RoutePlanner => view! { <RoutePlannerPage /> }.into_any(),
        AppRoute::ReportIncident => view! { <ReportIncidentPage /> }.into_any(),
        AppRoute::SurvivorBlog => view! { <SurvivorBlogPage /> }.into_any(),
        AppRoute::RateRoute => view! { <RateRoutePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建期配置并安装日志
    let config = config::init();

    // 2. 创建认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new(config.session_key);
    provide_context(auth_ctx);

    // 3. 通知服务
    provide_context(ToastContext::new(config.toast_limit, config.toast_duration));

    // 4. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 5. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <Toaster />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

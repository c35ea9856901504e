//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则以及导航菜单。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Landing,
    Login,
    Register,
    /// 无需登录的路线规划
    PublicRoutePlanner,
    /// 控制面板 (需要认证)
    Dashboard,
    Emergency,
    CrimeData,
    RoutePlanner,
    /// 匿名事件上报，对所有人开放
    ReportIncident,
    SurvivorBlog,
    RateRoute,
    Profile,
    /// 页面未找到
    NotFound,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 直接渲染目标页面
    Render(AppRoute),
    /// 拒绝访问，跳转到给定路由
    Redirect(AppRoute),
}

impl Resolution {
    /// 最终要展示的路由
    pub fn route(&self) -> AppRoute {
        match *self {
            Self::Render(route) | Self::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

impl AppRoute {
    /// 所有可匹配的路由（不含 NotFound）
    pub const ALL: [AppRoute; 12] = [
        Self::Landing,
        Self::Login,
        Self::Register,
        Self::PublicRoutePlanner,
        Self::Dashboard,
        Self::Emergency,
        Self::CrimeData,
        Self::RoutePlanner,
        Self::ReportIncident,
        Self::SurvivorBlog,
        Self::RateRoute,
        Self::Profile,
    ];

    /// 将 URL path 解析为路由枚举
    ///
    /// 不区分大小写，末尾多余的 `/` 会被忽略，其余未知路径一律视为 NotFound。
    pub fn from_path(path: &str) -> Self {
        let normalized = path.trim_end_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/public-route-planner" => Self::PublicRoutePlanner,
            "/dashboard" => Self::Dashboard,
            "/emergency" => Self::Emergency,
            "/crime-data" => Self::CrimeData,
            "/route-planner" => Self::RoutePlanner,
            "/report-incident" => Self::ReportIncident,
            "/survivor-blog" => Self::SurvivorBlog,
            "/rate-route" => Self::RateRoute,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::PublicRoutePlanner => "/public-route-planner",
            Self::Dashboard => "/dashboard",
            Self::Emergency => "/emergency",
            Self::CrimeData => "/crime-data",
            Self::RoutePlanner => "/route-planner",
            Self::ReportIncident => "/report-incident",
            Self::SurvivorBlog => "/survivor-blog",
            Self::RateRoute => "/rate-route",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Emergency
                | Self::CrimeData
                | Self::RoutePlanner
                | Self::SurvivorBlog
                | Self::RateRoute
                | Self::Profile
        )
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的跳转目标（登录 / 注册之后）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 对 (路由, 认证状态) 做守卫判定
    ///
    /// 纯函数，每次导航都会重新求值。
    pub fn guard(self, is_authenticated: bool) -> Resolution {
        if self.requires_auth() && !is_authenticated {
            tracing::warn!(route = %self, "access denied, redirecting to login");
            Resolution::Redirect(Self::auth_failure_redirect())
        } else {
            Resolution::Render(self)
        }
    }

    /// `from_path` + `guard` 的组合
    pub fn resolve(path: &str, is_authenticated: bool) -> Resolution {
        Self::from_path(path).guard(is_authenticated)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 导航菜单
// =========================================================

/// 导航栏菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: AppRoute,
}

impl NavItem {
    /// 当前路径是否就是该菜单项（用于高亮）
    pub fn is_active(&self, current: AppRoute) -> bool {
        self.route == current
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Route Planner",
        route: AppRoute::RoutePlanner,
    },
    NavItem {
        label: "Report Incident",
        route: AppRoute::ReportIncident,
    },
    NavItem {
        label: "Survivor Blog",
        route: AppRoute::SurvivorBlog,
    },
    NavItem {
        label: "Rate a Route",
        route: AppRoute::RateRoute,
    },
    NavItem {
        label: "Profile",
        route: AppRoute::Profile,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn protected() -> impl Iterator<Item = AppRoute> {
        AppRoute::ALL.into_iter().filter(AppRoute::requires_auth)
    }

    #[test]
    fn test_protected_set() {
        let paths: Vec<_> = protected().map(|r| r.to_path()).collect();
        assert_eq!(
            paths,
            vec![
                "/dashboard",
                "/emergency",
                "/crime-data",
                "/route-planner",
                "/survivor-blog",
                "/rate-route",
                "/profile",
            ]
        );
    }

    #[test]
    fn test_protected_redirects_when_signed_out() {
        for route in protected() {
            assert_eq!(
                AppRoute::resolve(route.to_path(), false),
                Resolution::Redirect(AppRoute::Login),
                "{route} should redirect"
            );
        }
    }

    #[test]
    fn test_protected_renders_when_signed_in() {
        for route in protected() {
            assert_eq!(
                AppRoute::resolve(route.to_path(), true),
                Resolution::Render(route)
            );
        }
    }

    #[test]
    fn test_public_routes_render_regardless_of_session() {
        let public = [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::PublicRoutePlanner,
            AppRoute::ReportIncident,
        ];
        for route in public {
            for auth in [false, true] {
                assert_eq!(route.guard(auth), Resolution::Render(route));
            }
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::resolve("/admin/secret", false),
            Resolution::Render(AppRoute::NotFound)
        );
    }

    #[test]
    fn test_path_round_trip_and_trailing_slash() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/profile/"), AppRoute::Profile);
        assert_eq!(AppRoute::from_path(""), AppRoute::Landing);
    }

    #[test]
    fn test_paths_match_case_insensitively() {
        assert_eq!(AppRoute::from_path("/Dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/SURVIVOR-BLOG/"), AppRoute::SurvivorBlog);
        assert_eq!(
            AppRoute::resolve("/Dashboard", false),
            Resolution::Redirect(AppRoute::Login)
        );
        assert_eq!(
            AppRoute::resolve("/Profile", true),
            Resolution::Render(AppRoute::Profile)
        );
    }

    #[test]
    fn test_nav_item_active() {
        let planner = NAV_ITEMS[0];
        assert!(planner.is_active(AppRoute::RoutePlanner));
        assert!(!planner.is_active(AppRoute::PublicRoutePlanner));
    }
}

use leptos::prelude::*;
use serenova_shared::{AppRoute, NAV_ITEMS};

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

/// 页面外框，可选显示导航栏
#[component]
pub fn Layout(#[prop(optional)] show_navbar: bool, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            {show_navbar.then(|| view! { <Navbar /> })}
            <main>{children()}</main>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    // 先离开受保护页面再清除会话，避免触发登录重定向
    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        set_menu_open.set(false);
        router.navigate_to(AppRoute::Landing);
        auth.sign_out();
    };

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let item = *item;
                let on_click = move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    set_menu_open.set(false);
                    router.navigate_to(item.route);
                };
                view! {
                    <li>
                        <a
                            href=item.route.to_path()
                            class=move || {
                                if item.is_active(router.current_route().get()) {
                                    "active font-medium"
                                } else {
                                    "font-medium"
                                }
                            }
                            on:click=on_click
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="navbar bg-base-100 shadow sticky top-0 z-30">
            <div class="flex-1">
                <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl gap-2">
                    <span class="badge badge-primary badge-lg font-bold">"S"</span>
                    "Serenova"
                </Link>
            </div>
            <div class="flex-none hidden md:flex">
                <ul class="menu menu-horizontal px-1 gap-1">
                    {nav_links()}
                    <li>
                        <a href="/" on:click=on_logout>"Logout"</a>
                    </li>
                </ul>
            </div>
            <div class="flex-none md:hidden">
                <button
                    class="btn btn-square btn-ghost"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </div>
        <Show when=move || menu_open.get()>
            <ul class="menu bg-base-100 shadow md:hidden">
                {nav_links()}
                <li>
                    <a href="/" on:click=on_logout>"Logout"</a>
                </li>
            </ul>
        </Show>
    }
}

use leptos::prelude::*;
use serenova_shared::AppRoute;

use crate::auth::use_auth;
use crate::components::layout::Layout;
use crate::web::router::Link;

/// 功能入口卡片
const SHORTCUTS: [(&str, &str, AppRoute); 6] = [
    ("Route Planner", "Find the safest way to your destination", AppRoute::RoutePlanner),
    ("Emergency", "Reach help and your emergency contact fast", AppRoute::Emergency),
    ("Crime Data", "See what has been reported near you", AppRoute::CrimeData),
    ("Report Incident", "Alert the community anonymously", AppRoute::ReportIncident),
    ("Survivor Blog", "Read and share stories", AppRoute::SurvivorBlog),
    ("Rate a Route", "Help others travel safely", AppRoute::RateRoute),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session.with(|s| match s.user_id() {
            Some(user) => format!("Welcome back, {user}"),
            None => "Welcome back".to_string(),
        })
    };

    let cards = SHORTCUTS
        .into_iter()
        .map(|(title, desc, route)| {
            view! {
                <Link to=route class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
                    <div class="card-body">
                        <h3 class="card-title">{title}</h3>
                        <p class="text-base-content/70 text-sm">{desc}</p>
                    </div>
                </Link>
            }
        })
        .collect_view();

    view! {
        <Layout show_navbar=true>
            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">{greeting}</h1>
                    <p class="text-base-content/70">"Stay safe out there. Here is what you can do today."</p>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Safety Status"</div>
                        <div class="stat-value text-success">"Safe"</div>
                        <div class="stat-desc">"No incidents reported nearby this week"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Emergency Contact"</div>
                        <div class="stat-value text-primary text-2xl">"Ready"</div>
                        <div class="stat-desc">"Manage it from your profile"</div>
                    </div>
                </div>

                <div class="grid gap-4 md:grid-cols-3">{cards}</div>
            </div>
        </Layout>
    }
}

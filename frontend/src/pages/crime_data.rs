use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::safety_map::SafetyMap;

/// 附近事件汇总（静态示例数据）
const NEARBY: [(&str, &str, &str); 3] = [
    ("Harassment", "Westside Shopping Center", "3 days ago"),
    ("Theft", "Downtown Main St", "1 week ago"),
    ("Suspicious Activity", "Riverside Park", "2 weeks ago"),
];

#[component]
pub fn CrimeDataPage() -> impl IntoView {
    let rows = NEARBY
        .into_iter()
        .map(|(kind, place, when)| {
            view! {
                <tr>
                    <td>{kind}</td>
                    <td>{place}</td>
                    <td class="text-base-content/60">{when}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Layout show_navbar=true>
            <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-3xl font-bold">"Crime Data"</h1>
                <SafetyMap start=Signal::derive(|| None::<String>) end=Signal::derive(|| None::<String>) />
                <div class="card bg-base-100 shadow">
                    <div class="card-body p-0">
                        <h2 class="card-title p-6 pb-2">"Recent reports nearby"</h2>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Type"</th>
                                        <th>"Location"</th>
                                        <th>"Reported"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

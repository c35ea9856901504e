use leptos::prelude::*;

/// 地图占位：没有真实地图数据，只根据端点显示提示文字
#[component]
pub fn SafetyMap(
    #[prop(into)] start: Signal<Option<String>>,
    #[prop(into)] end: Signal<Option<String>>,
) -> impl IntoView {
    let caption = move || match (start.get(), end.get()) {
        (Some(start), Some(end)) => format!("Showing safest route from {start} to {end}"),
        _ => "Enter start and end locations to see the safest route".to_string(),
    };

    view! {
        <div class="w-full h-72 rounded-box bg-base-300 flex flex-col items-center justify-center gap-2">
            <span class="text-4xl">"🗺"</span>
            <p class="text-base-content/70 text-center px-4">{caption}</p>
            <p class="text-xs text-base-content/50">"Incident heat map coming soon"</p>
        </div>
    }
}

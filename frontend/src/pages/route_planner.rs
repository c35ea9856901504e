use leptos::prelude::*;
use serenova_shared::forms::RoutePlanForm;

use crate::components::controls::FloatingLabelInput;
use crate::components::layout::Layout;
use crate::components::safety_map::SafetyMap;
use crate::form::FormState;
use crate::toast::use_toast;

/// 路线规划页
///
/// 公开版本不显示导航栏和路线详情，其余行为相同。
#[component]
pub fn RoutePlannerPage(#[prop(optional)] public: bool) -> impl IntoView {
    let toasts = use_toast();
    let form = FormState::<RoutePlanForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(toasts);
    };

    let start = Signal::derive(move || form.values.with(|f| f.endpoints().0.map(str::to_string)));
    let end = Signal::derive(move || form.values.with(|f| f.endpoints().1.map(str::to_string)));

    let details = move || {
        form.values.with(RoutePlanForm::summary).map(|summary| {
            view! {
                <div class="alert mt-6 flex-col items-start">
                    <h3 class="text-lg font-semibold">"Route Information"</h3>
                    <p><span class="font-medium">"Distance: "</span>{summary.distance}</p>
                    <p><span class="font-medium">"Estimated Time: "</span>{summary.duration}</p>
                    <p>
                        <span class="font-medium">"Safety Rating: "</span>
                        <span class="text-success font-medium">{summary.safety}</span>
                    </p>
                    <p><span class="font-medium">"Reported Incidents: "</span>{summary.incidents}</p>
                </div>
            }
        })
    };

    view! {
        <Layout show_navbar=!public>
            <div class="max-w-3xl mx-auto p-4 md:p-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Find the Safest Route"</h1>
                    {public.then(|| view! {
                        <p class="text-base-content/70">"Plan your journey with safety in mind."</p>
                    })}
                </div>

                <div class="card bg-base-100 shadow mb-6">
                    <form class="card-body" on:submit=on_submit>
                        <FloatingLabelInput
                            id="startLocation"
                            label="Start Location"
                            value=form.value("startLocation")
                            on_input=move |v: String| form.edit(|f| f.set_start(v))
                        />
                        <FloatingLabelInput
                            id="endLocation"
                            label="End Location"
                            value=form.value("endLocation")
                            on_input=move |v: String| form.edit(|f| f.set_end(v))
                        />
                        <button type="submit" class="btn btn-primary w-full mt-2">"Plan Route"</button>
                    </form>
                </div>

                <SafetyMap start=start end=end />
                {(!public).then_some(details)}
            </div>
        </Layout>
    }
}

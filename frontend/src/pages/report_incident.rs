use leptos::prelude::*;
use serenova_shared::forms::{IncidentReportForm, IncidentType};

use crate::components::controls::{FloatingLabelInput, FloatingLabelTextarea};
use crate::components::layout::Layout;
use crate::form::FormState;
use crate::toast::use_toast;

#[component]
pub fn ReportIncidentPage() -> impl IntoView {
    let toasts = use_toast();
    let form = FormState::<IncidentReportForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(toasts);
    };

    let kind_value = form.value("type");
    let options = IncidentType::ALL
        .into_iter()
        .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
        .collect_view();

    view! {
        <Layout show_navbar=true>
            <div class="max-w-3xl mx-auto p-4 md:p-8">
                <h1 class="text-3xl font-bold mb-6">"Report an Incident Anonymously"</h1>

                <div class="card bg-base-100 shadow">
                    <form class="card-body" on:submit=on_submit>
                        <FloatingLabelInput
                            id="location"
                            label="Location (street address or landmark)"
                            value=form.value("location")
                            on_input=move |v: String| form.edit(|f| f.location = v)
                        />

                        <div class="form-control mb-4">
                            <label class="label" for="type">
                                <span class="label-text">"Incident Type"</span>
                            </label>
                            <select
                                id="type"
                                name="type"
                                class="select select-bordered w-full"
                                prop:value=move || kind_value.get()
                                on:change=move |ev| {
                                    let kind = IncidentType::from_value(&event_target_value(&ev));
                                    form.edit(|f| f.kind = kind);
                                }
                            >
                                <option value="">"Select an incident type"</option>
                                {options}
                            </select>
                        </div>

                        <FloatingLabelTextarea
                            id="description"
                            label="Description (what happened?)"
                            value=form.value("description")
                            on_input=move |v: String| form.edit(|f| f.description = v)
                        />

                        <label class="label cursor-pointer justify-start gap-2 mb-4">
                            <input type="checkbox" class="checkbox checkbox-primary checkbox-sm" />
                            <span class="label-text">
                                "I understand that this report will be anonymous and may be used to alert other users."
                            </span>
                        </label>

                        <button type="submit" class="btn btn-primary w-full">"Submit Report"</button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}

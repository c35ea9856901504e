//! 表单输入控件
//!
//! 纯粹的输入渲染：当前值、变更回调和可选的错误消息，职责单一。

use leptos::prelude::*;

/// 错误消息行，空串时不渲染
fn error_line(error: Option<Signal<String>>) -> impl IntoView {
    move || {
        error
            .map(|e| e.get())
            .filter(|msg| !msg.is_empty())
            .map(|msg| {
                view! {
                    <label class="label">
                        <span class="label-text-alt text-error">{msg}</span>
                    </label>
                }
            })
    }
}

#[component]
pub fn FloatingLabelInput(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<String>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let has_error = move || error.map(|e| !e.get().is_empty()).unwrap_or(false);

    view! {
        <div class="form-control mb-4">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                class=move || {
                    if has_error() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {error_line(error)}
        </div>
    }
}

#[component]
pub fn FloatingLabelTextarea(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="form-control mb-4">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <textarea
                id=id
                name=id
                rows="4"
                class="textarea textarea-bordered w-full"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {error_line(error)}
        </div>
    }
}

/// 五星评分输入，0 表示未选择
#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<u8>,
    #[prop(into)] on_change: Callback<u8>,
) -> impl IntoView {
    let stars = (1..=5u8)
        .map(|star| {
            view! {
                <button
                    type="button"
                    aria-label=format!("{star} star")
                    class=move || {
                        if star <= value.get() {
                            "btn btn-ghost btn-sm text-warning text-2xl px-1"
                        } else {
                            "btn btn-ghost btn-sm text-base-300 text-2xl px-1"
                        }
                    }
                    on:click=move |_| on_change.run(star)
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    view! { <div class="flex items-center">{stars}</div> }
}

use leptos::prelude::*;
use serenova_shared::AfterSubmit;
use serenova_shared::content::{SortMode, sample_stories, sorted};
use serenova_shared::forms::StoryForm;

use crate::components::controls::{FloatingLabelInput, FloatingLabelTextarea};
use crate::components::layout::Layout;
use crate::components::story_card::StoryCard;
use crate::form::FormState;
use crate::toast::use_toast;

#[component]
pub fn SurvivorBlogPage() -> impl IntoView {
    let toasts = use_toast();
    let form = FormState::<StoryForm>::new();
    let (sort_mode, set_sort_mode) = signal(SortMode::default());
    let (show_form, set_show_form) = signal(false);
    let stories = StoredValue::new(sample_stories());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(AfterSubmit::ResetAndClose | AfterSubmit::Close) = form.submit(toasts) {
            set_show_form.set(false);
        }
    };

    let sort_button = move |mode: SortMode, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if sort_mode.get() == mode {
                        "btn btn-sm join-item btn-primary"
                    } else {
                        "btn btn-sm join-item"
                    }
                }
                on:click=move |_| set_sort_mode.set(mode)
            >
                {label}
            </button>
        }
    };

    let story_list = move || {
        let mode = sort_mode.get();
        stories
            .with_value(|all| sorted(all, mode))
            .into_iter()
            .map(|story| view! { <StoryCard story=story /> })
            .collect_view()
    };

    view! {
        <Layout show_navbar=true>
            <div class="max-w-3xl mx-auto p-4 md:p-8">
                <h1 class="text-3xl font-bold mb-6">"Survivor Blog"</h1>

                <div class="flex flex-col md:flex-row md:justify-between items-center gap-3 mb-6">
                    <div class="join" role="group">
                        {sort_button(SortMode::Latest, "Latest")}
                        {sort_button(SortMode::Popular, "Popular")}
                    </div>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| set_show_form.update(|open| *open = !*open)
                    >
                        {move || if show_form.get() { "Cancel" } else { "Share Your Story" }}
                    </button>
                </div>

                <Show when=move || show_form.get()>
                    <div class="card bg-base-100 shadow mb-8">
                        <form class="card-body" on:submit=on_submit>
                            <h2 class="card-title mb-2">"Share Your Story"</h2>
                            <FloatingLabelInput
                                id="title"
                                label="Story Title"
                                value=form.value("title")
                                on_input=move |v: String| form.edit(|f| f.title = v)
                            />
                            <FloatingLabelTextarea
                                id="content"
                                label="Your Story"
                                value=form.value("content")
                                on_input=move |v: String| form.edit(|f| f.content = v)
                            />
                            <label class="label cursor-pointer justify-start gap-2 mb-4">
                                <input
                                    type="checkbox"
                                    name="anonymous"
                                    class="checkbox checkbox-primary checkbox-sm"
                                    prop:checked=move || form.values.with(|f| f.anonymous)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.edit(|f| f.anonymous = checked);
                                    }
                                />
                                <span class="label-text">"Post anonymously"</span>
                            </label>
                            <button type="submit" class="btn btn-primary w-full">"Post Story"</button>
                        </form>
                    </div>
                </Show>

                <div class="space-y-4">{story_list}</div>
            </div>
        </Layout>
    }
}

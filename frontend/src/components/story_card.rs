use leptos::prelude::*;
use serenova_shared::content::Story;

#[component]
pub fn StoryCard(story: Story) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{story.title}</h3>
                <p class="text-base-content/80 whitespace-pre-line">{story.content}</p>
                <div class="flex justify-between items-center text-sm text-base-content/60 mt-2">
                    <span>{story.author} " · " {story.date}</span>
                    <span class="badge badge-ghost gap-1">"♥ " {story.likes}</span>
                </div>
            </div>
        </div>
    }
}

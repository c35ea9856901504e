use leptos::prelude::*;
use serenova_shared::AppRoute;

use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Oops! Page not found"</p>
                <Link to=AppRoute::Landing class="btn btn-primary mt-6">"Return to Home"</Link>
            </div>
        </div>
    }
}

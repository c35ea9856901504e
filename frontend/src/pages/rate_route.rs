use leptos::prelude::*;
use serenova_shared::content::{RatedRoute, rating_label, recent_route_ratings};
use serenova_shared::forms::RouteRatingForm;

use crate::components::controls::{FloatingLabelInput, FloatingLabelTextarea, StarRating};
use crate::components::layout::Layout;
use crate::form::FormState;
use crate::toast::use_toast;

fn rated_route_card(route: RatedRoute) -> impl IntoView {
    let stars = (1..=RouteRatingForm::MAX_RATING)
        .map(|i| {
            let class = if i <= route.rating { "text-warning" } else { "text-base-300" };
            view! { <span class=class>"★"</span> }
        })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body py-4">
                <h4 class="font-medium">{route.name}</h4>
                <div class="flex items-center gap-2">
                    <span>{stars}</span>
                    <span class="text-sm text-base-content/60">"by " {route.user}</span>
                </div>
                <p class="text-sm text-base-content/70">{route.comment}</p>
            </div>
        </div>
    }
}

#[component]
pub fn RateRoutePage() -> impl IntoView {
    let toasts = use_toast();
    let form = FormState::<RouteRatingForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(toasts);
    };

    let rating = Signal::derive(move || form.values.with(|f| f.rating));
    let label = move || rating_label(rating.get());

    let recent = recent_route_ratings()
        .into_iter()
        .map(rated_route_card)
        .collect_view();

    view! {
        <Layout show_navbar=true>
            <div class="max-w-3xl mx-auto p-4 md:p-8">
                <h1 class="text-3xl font-bold mb-6">"Rate a Route"</h1>

                <div class="card bg-base-100 shadow">
                    <form class="card-body" on:submit=on_submit>
                        <FloatingLabelInput
                            id="routeName"
                            label="Route Name or Area"
                            value=form.value("routeName")
                            on_input=move |v: String| form.edit(|f| f.route_name = v)
                        />

                        <div class="mb-6">
                            <span class="label-text block mb-2">"Safety Rating"</span>
                            <StarRating
                                value=rating
                                on_change=move |stars: u8| form.edit(|f| f.set_rating(stars))
                            />
                            {move || label().map(|text| view! {
                                <p class="mt-2 text-sm text-base-content/60">{text}</p>
                            })}
                        </div>

                        <FloatingLabelTextarea
                            id="comments"
                            label="Comments (Optional)"
                            value=form.value("comments")
                            on_input=move |v: String| form.edit(|f| f.comments = v)
                        />

                        <button type="submit" class="btn btn-primary w-full">"Submit Rating"</button>
                    </form>
                </div>

                <div class="mt-8">
                    <h3 class="text-lg font-semibold mb-4">"Recently Rated Routes"</h3>
                    <div class="space-y-4">{recent}</div>
                </div>
            </div>
        </Layout>
    }
}

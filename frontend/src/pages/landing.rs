use leptos::prelude::*;
use serenova_shared::AppRoute;

use crate::components::layout::Layout;
use crate::web::router::Link;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="hero min-h-screen">
                <div class="hero-content text-center">
                    <div class="max-w-md flex flex-col items-center gap-4">
                        <span class="badge badge-primary badge-lg text-2xl font-bold p-6">"S"</span>
                        <h1 class="text-5xl font-bold">"Serenova"</h1>
                        <p class="text-base-content/70">
                            "Plan safer journeys, report incidents anonymously and share your story with a community that has your back."
                        </p>
                        <div class="flex flex-col w-full gap-3 mt-4">
                            <Link to=AppRoute::Login class="btn btn-primary">"Log In"</Link>
                            <Link to=AppRoute::Register class="btn btn-outline btn-primary">
                                "Create Account"
                            </Link>
                            <Link to=AppRoute::PublicRoutePlanner class="btn btn-ghost">
                                "Find a Safe Route"
                            </Link>
                            <Link to=AppRoute::ReportIncident class="btn btn-ghost">
                                "Report an Incident Anonymously"
                            </Link>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

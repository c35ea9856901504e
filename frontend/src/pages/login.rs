use leptos::prelude::*;
use serenova_shared::AppRoute;
use serenova_shared::forms::LoginForm;

use crate::auth::use_auth;
use crate::components::controls::FloatingLabelInput;
use crate::components::layout::Layout;
use crate::form::{FormState, finish_sign_in};
use crate::toast::use_toast;
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toast();
    let form = FormState::<LoginForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(then) = form.submit(toasts) {
            finish_sign_in(then, auth, router);
        }
    };

    view! {
        <Layout>
            <div class="hero min-h-screen">
                <div class="hero-content flex-col w-full max-w-md">
                    <Link to=AppRoute::Landing class="link link-primary self-start">
                        "← Back to Home"
                    </Link>
                    <h1 class="text-3xl font-bold text-center">"Log in to your account"</h1>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <FloatingLabelInput
                                id="email"
                                label="Email Address"
                                input_type="email"
                                autocomplete="email"
                                value=form.value("email")
                                on_input=move |v: String| form.edit(|f| f.email = v)
                                error=form.error("email")
                            />
                            <FloatingLabelInput
                                id="password"
                                label="Password"
                                input_type="password"
                                autocomplete="current-password"
                                value=form.value("password")
                                on_input=move |v: String| form.edit(|f| f.password = v)
                                error=form.error("password")
                            />
                            <div class="form-control mt-6">
                                <button type="submit" class="btn btn-primary">"Login"</button>
                            </div>
                        </form>
                    </div>

                    <p class="text-sm text-base-content/70">
                        "Don't have an account? "
                        <Link to=AppRoute::Register class="link link-primary font-medium">
                            "Register"
                        </Link>
                    </p>
                </div>
            </div>
        </Layout>
    }
}

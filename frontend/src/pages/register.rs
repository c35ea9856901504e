use leptos::prelude::*;
use serenova_shared::AppRoute;
use serenova_shared::forms::RegisterForm;

use crate::auth::use_auth;
use crate::components::controls::FloatingLabelInput;
use crate::components::layout::Layout;
use crate::form::{FormState, finish_sign_in};
use crate::toast::use_toast;
use crate::web::router::{Link, use_router};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toast();
    let form = FormState::<RegisterForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(then) = form.submit(toasts) {
            finish_sign_in(then, auth, router);
        }
    };

    view! {
        <Layout>
            <div class="hero min-h-screen py-12">
                <div class="hero-content flex-col w-full max-w-md">
                    <Link to=AppRoute::Landing class="link link-primary self-start">
                        "← Back to Home"
                    </Link>
                    <h1 class="text-3xl font-bold text-center">"Create your account"</h1>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <FloatingLabelInput
                                id="fullName"
                                label="Full Name"
                                autocomplete="name"
                                value=form.value("fullName")
                                on_input=move |v: String| form.edit(|f| f.full_name = v)
                                error=form.error("fullName")
                            />
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
                                autocomplete="new-password"
                                value=form.value("password")
                                on_input=move |v: String| form.edit(|f| f.password = v)
                                error=form.error("password")
                            />
                            <FloatingLabelInput
                                id="confirmPassword"
                                label="Confirm Password"
                                input_type="password"
                                autocomplete="new-password"
                                value=form.value("confirmPassword")
                                on_input=move |v: String| form.edit(|f| f.confirm_password = v)
                                error=form.error("confirmPassword")
                            />
                            <FloatingLabelInput
                                id="phoneNumber"
                                label="Phone Number (Optional)"
                                input_type="tel"
                                autocomplete="tel"
                                value=form.value("phoneNumber")
                                on_input=move |v: String| form.edit(|f| f.phone_number = v)
                                error=form.error("phoneNumber")
                            />

                            <h2 class="font-semibold mt-4 mb-2">"Emergency Contact"</h2>
                            <FloatingLabelInput
                                id="emergencyContactName"
                                label="Emergency Contact Name"
                                value=form.value("emergencyContactName")
                                on_input=move |v: String| form.edit(|f| f.emergency_contact_name = v)
                                error=form.error("emergencyContactName")
                            />
                            <FloatingLabelInput
                                id="emergencyContactNumber"
                                label="Emergency Contact Number"
                                input_type="tel"
                                value=form.value("emergencyContactNumber")
                                on_input=move |v: String| {
                                    form.edit(|f| f.emergency_contact_number = v)
                                }
                                error=form.error("emergencyContactNumber")
                            />

                            <div class="form-control mt-6">
                                <button type="submit" class="btn btn-primary">"Register"</button>
                            </div>
                        </form>
                    </div>

                    <p class="text-sm text-base-content/70">
                        "Already have an account? "
                        <Link to=AppRoute::Login class="link link-primary font-medium">
                            "Log in"
                        </Link>
                    </p>
                </div>
            </div>
        </Layout>
    }
}

use leptos::prelude::*;
use serenova_shared::AfterSubmit;
use serenova_shared::forms::{ContactForm, PasswordForm};

use crate::components::controls::FloatingLabelInput;
use crate::components::layout::Layout;
use crate::form::FormState;
use crate::toast::use_toast;

fn closes_panel(then: Option<AfterSubmit>) -> bool {
    matches!(then, Some(AfterSubmit::Close | AfterSubmit::ResetAndClose))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = use_toast();
    let contact = FormState::<ContactForm>::new();
    let password = FormState::<PasswordForm>::new();
    let (editing, set_editing) = signal(false);
    let (changing_password, set_changing_password) = signal(false);

    let on_contact_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if closes_panel(contact.submit(toasts)) {
            set_editing.set(false);
        }
    };

    let on_password_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if closes_panel(password.submit(toasts)) {
            set_changing_password.set(false);
        }
    };

    let contact_summary = move || {
        contact.values.with(|c| {
            view! {
                <div class="space-y-4">
                    <div>
                        <p class="text-sm text-base-content/60">"Full Name"</p>
                        <p class="font-medium">{c.full_name.clone()}</p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Email Address"</p>
                        <p class="font-medium">{c.email.clone()}</p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Phone Number"</p>
                        <p class="font-medium">{c.phone_number.clone()}</p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Emergency Contact"</p>
                        <p class="font-medium">
                            {format!("{} ({})", c.emergency_contact_name, c.emergency_contact_number)}
                        </p>
                    </div>
                </div>
            }
        })
    };

    let contact_form = move || {
        view! {
            <form on:submit=on_contact_submit>
                <FloatingLabelInput
                    id="fullName"
                    label="Full Name"
                    value=contact.value("fullName")
                    on_input=move |v: String| contact.edit(|f| f.full_name = v)
                    error=contact.error("fullName")
                />
                <FloatingLabelInput
                    id="email"
                    label="Email Address"
                    input_type="email"
                    value=contact.value("email")
                    on_input=move |v: String| contact.edit(|f| f.email = v)
                    error=contact.error("email")
                />
                <FloatingLabelInput
                    id="phoneNumber"
                    label="Phone Number"
                    input_type="tel"
                    value=contact.value("phoneNumber")
                    on_input=move |v: String| contact.edit(|f| f.phone_number = v)
                    error=contact.error("phoneNumber")
                />

                <h3 class="font-semibold mt-6 mb-3">"Emergency Contact"</h3>
                <FloatingLabelInput
                    id="emergencyContactName"
                    label="Emergency Contact Name"
                    value=contact.value("emergencyContactName")
                    on_input=move |v: String| contact.edit(|f| f.emergency_contact_name = v)
                    error=contact.error("emergencyContactName")
                />
                <FloatingLabelInput
                    id="emergencyContactNumber"
                    label="Emergency Contact Number"
                    input_type="tel"
                    value=contact.value("emergencyContactNumber")
                    on_input=move |v: String| contact.edit(|f| f.emergency_contact_number = v)
                    error=contact.error("emergencyContactNumber")
                />

                <div class="flex justify-end gap-3 mt-6">
                    <button type="button" class="btn btn-outline" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Save Changes"</button>
                </div>
            </form>
        }
    };

    let password_form = move || {
        view! {
            <form on:submit=on_password_submit>
                <FloatingLabelInput
                    id="currentPassword"
                    label="Current Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password.value("currentPassword")
                    on_input=move |v: String| password.edit(|f| f.current_password = v)
                    error=password.error("currentPassword")
                />
                <FloatingLabelInput
                    id="newPassword"
                    label="New Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password.value("newPassword")
                    on_input=move |v: String| password.edit(|f| f.new_password = v)
                    error=password.error("newPassword")
                />
                <FloatingLabelInput
                    id="confirmPassword"
                    label="Confirm New Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password.value("confirmPassword")
                    on_input=move |v: String| password.edit(|f| f.confirm_password = v)
                    error=password.error("confirmPassword")
                />

                <div class="flex justify-end gap-3 mt-6">
                    <button
                        type="button"
                        class="btn btn-outline"
                        on:click=move |_| set_changing_password.set(false)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Update Password"</button>
                </div>
            </form>
        }
    };

    view! {
        <Layout show_navbar=true>
            <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-3xl font-bold">"Your Profile"</h1>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="card-title">"Personal Information"</h2>
                            <Show when=move || !editing.get()>
                                <button class="btn btn-link btn-sm" on:click=move |_| set_editing.set(true)>
                                    "Edit"
                                </button>
                            </Show>
                        </div>
                        <Show when=move || editing.get() fallback=contact_summary>
                            {contact_form}
                        </Show>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title mb-4">"Security"</h2>
                        <Show
                            when=move || changing_password.get()
                            fallback=move || view! {
                                <button
                                    class="btn btn-outline w-full"
                                    on:click=move |_| set_changing_password.set(true)
                                >
                                    "Change Password"
                                </button>
                            }
                        >
                            {password_form}
                        </Show>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::toast::use_toast;
use serenova_shared::Notice;

/// 紧急求助页；没有后端，所有操作只给出本地提示
#[component]
pub fn EmergencyPage() -> impl IntoView {
    let toasts = use_toast();

    let alert_contact = move |_| {
        tracing::info!("emergency alert requested");
        toasts.toast(Notice::destructive(
            "Emergency alert sent",
            "Your emergency contact has been notified of your location.",
        ));
    };

    view! {
        <Layout show_navbar=true>
            <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-3xl font-bold">"Emergency"</h1>

                <div class="card bg-error text-error-content shadow-xl">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">"In immediate danger?"</h2>
                        <p>"Call your local emergency number right away."</p>
                        <a href="tel:911" class="btn btn-lg bg-base-100 text-error mt-2">"Call 911"</a>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Alert your emergency contact"</h2>
                        <p class="text-base-content/70">
                            "Send your current location to the contact saved in your profile."
                        </p>
                        <div class="card-actions justify-end">
                            <button class="btn btn-error btn-outline" on:click=alert_contact>
                                "Send Alert"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

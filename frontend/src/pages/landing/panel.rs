use crate::{
    components::theme::ThemeToggle,
    config,
    pages::landing::{
        components::{features::FeatureCards, form::AuthForm},
        view_model::use_landing_view_model,
    },
    utils::task::TaskSlot,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

#[component]
pub fn LandingPanel() -> impl IntoView {
    let vm = use_landing_view_model();
    let navigate = use_navigate();

    let redirect = vm.redirect;
    create_effect(move |_| {
        if let Some(path) = redirect.get() {
            navigate(&path, Default::default());
        }
    });

    let submit_task = TaskSlot::new();
    let submit_vm = vm.clone();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        submit_task.start_if_idle(async move { vm.submit().await });
    });

    view! {
        <div class="min-h-screen bg-surface text-fg">
            <header class="flex items-center justify-between px-8 py-4">
                <div class="flex items-center gap-2 font-semibold">
                    <i class="fas fa-shield-halved text-action-primary-bg"></i>
                    {config::APP_NAME}
                </div>
                <ThemeToggle/>
            </header>
            <main class="mx-auto grid max-w-6xl gap-12 px-8 py-12 lg:grid-cols-2">
                <section class="space-y-6">
                    <h1 class="text-4xl font-bold leading-tight">
                        "Expense management with "
                        <span class="text-action-primary-bg">"AI-powered transparency"</span>
                    </h1>
                    <p class="text-fg-muted">
                        "Scan receipts, catch anomalies as they happen, and give auditors a clear trail."
                    </p>
                    <FeatureCards/>
                </section>
                <section class="rounded-xl bg-surface-elevated p-8 shadow-lg">
                    <AuthForm vm=vm on_submit=on_submit/>
                </section>
            </main>
        </div>
    }
}

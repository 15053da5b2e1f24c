use crate::{
    api::{insights::INSIGHTS_FAILED, ApiClient, Insight},
    components::{cards::InsightCard, empty_state::EmptyState},
    utils::task::TaskSlot,
};
use leptos::*;
use std::rc::Rc;

pub const NO_INSIGHTS: &str = "No insights available yet. Upload receipts to generate insights.";

#[derive(Clone)]
pub struct AdminInsightsViewModel {
    pub insights: RwSignal<Vec<Insight>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    client: Rc<ApiClient>,
}

impl AdminInsightsViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            insights: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
            client,
        }
    }

    /// A successful answer without an insight list keeps what is shown.
    pub async fn load(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.client.get_admin_insights().await {
            Ok(Some(insights)) => self.insights.set(insights),
            Ok(None) => log::debug!("insight response carried no list"),
            Err(err) => {
                log::error!("admin insights not loaded: {}", err);
                self.error.set(Some(INSIGHTS_FAILED.to_string()));
            }
        }
        self.loading.set(false);
    }
}

#[component]
pub fn AdminInsightsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AdminInsightsViewModel::new(Rc::new(api));
    let load_task = TaskSlot::new();
    let load_vm = vm.clone();
    create_effect(move |_| {
        let vm = load_vm.clone();
        load_task.restart(async move { vm.load().await });
    });

    let refresh_vm = vm.clone();
    let on_refresh = move |_| {
        let vm = refresh_vm.clone();
        load_task.restart(async move { vm.load().await });
    };

    let insights = vm.insights;
    let loading = vm.loading;
    let error = vm.error;

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-5 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-base font-semibold">"AI Insights"</h3>
                <button
                    type="button"
                    class="text-sm text-action-primary-bg hover:underline"
                    on:click=on_refresh
                >
                    "Refresh"
                </button>
            </div>
            {move || {
                if loading.get() {
                    view! { <p class="text-center text-fg-muted py-5">"Loading insights..."</p> }
                        .into_view()
                } else if let Some(err) = error.get() {
                    view! { <p class="text-center text-status-error-text py-5">{err}</p> }.into_view()
                } else if insights.with(Vec::is_empty) {
                    view! { <EmptyState title=NO_INSIGHTS icon="fa-lightbulb"/> }.into_view()
                } else {
                    view! {
                        <div class="grid gap-4 md:grid-cols-2">
                            {insights
                                .get()
                                .into_iter()
                                .map(|insight| view! { <InsightCard insight=insight/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

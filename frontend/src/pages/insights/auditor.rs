use super::mock::demo_audit_insights;
use crate::{
    api::{ApiClient, AuditInsightData},
    components::{
        cards::{BarChart, BarDatum, ChartCard, InsightCard, StatCard},
        empty_state::EmptyState,
    },
    utils::{task::TaskSlot, time::format_currency},
};
use leptos::*;
use std::{cell::Cell, rc::Rc};

pub const SERVER_FALLBACK: &str = "Failed to load AI insights from server. Showing mock data.";
pub const NO_AUDIT_INSIGHTS: &str =
    "No insights available yet. Process audit items to generate insights.";

/// Starts on demo data; live data is fetched only after the auditor opts in.
#[derive(Clone)]
pub struct AuditorInsightsViewModel {
    pub data: RwSignal<AuditInsightData>,
    pub use_api: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Bumped on every source switch; a fetch only lands if it still matches.
    generation: Rc<Cell<u64>>,
    client: Rc<ApiClient>,
}

impl AuditorInsightsViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            data: create_rw_signal(demo_audit_insights()),
            use_api: create_rw_signal(false),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            generation: Rc::new(Cell::new(0)),
            client,
        }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub async fn fetch(&self) {
        let ticket = self.next_generation();
        self.loading.set(true);
        self.error.set(None);
        let result = self.client.get_auditor_insights().await;
        if self.generation.get() != ticket || !self.use_api.get_untracked() {
            log::debug!("dropping auditor insights from a superseded fetch");
            return;
        }
        match result {
            Ok(data) => self.data.set(data),
            Err(err) => {
                log::error!("auditor insights not loaded: {}", err);
                self.error.set(Some(SERVER_FALLBACK.to_string()));
                self.data.set(demo_audit_insights());
            }
        }
        self.loading.set(false);
    }

    /// Flips between live and demo data.
    pub async fn toggle_source(&self) {
        if self.use_api.get_untracked() {
            self.next_generation();
            self.use_api.set(false);
            self.loading.set(false);
            self.error.set(None);
            self.data.set(demo_audit_insights());
        } else {
            self.use_api.set(true);
            self.fetch().await;
        }
    }
}

fn fixed(value: String) -> Signal<String> {
    Signal::derive(move || value.clone())
}

#[component]
pub fn AuditorInsightsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AuditorInsightsViewModel::new(Rc::new(api));

    let toggle_task = TaskSlot::new();
    let toggle_vm = vm.clone();
    let on_toggle = move |_| {
        let vm = toggle_vm.clone();
        toggle_task.restart(async move { vm.toggle_source().await });
    };

    let data = vm.data;
    let use_api = vm.use_api;
    let loading = vm.loading;
    let error = vm.error;

    let metric = move |f: fn(&AuditInsightData) -> String| Signal::derive(move || data.with(f));
    let categories = Signal::derive(move || {
        data.with(|d| {
            d.spending_by_category
                .iter()
                .map(|c| BarDatum::new(c.category.clone(), c.amount))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-6">
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <StatCard
                    label="Total Expenses"
                    value=metric(|d| format_currency(d.top_metrics.total_expenses))
                    hint="Under review"
                />
                <StatCard
                    label="Compliance Rate"
                    value=metric(|d| format!("{:.1}%", d.top_metrics.compliance_rate))
                    hint="Current audit status"
                />
                <StatCard
                    label="Risk Score"
                    value=metric(|d| format!("{:.1}", d.top_metrics.risk_score))
                    hint="Overall assessment"
                />
                <StatCard
                    label="Insights Generated"
                    value=metric(|d| d.insights.len().to_string())
                    hint="Actionable items"
                />
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-5 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-base font-semibold">"Audit AI Insights"</h3>
                    <div class="flex items-center gap-3">
                        <Show when=move || error.with(Option::is_some)>
                            <span class="badge yellow">"Using demo data"</span>
                        </Show>
                        <button
                            type="button"
                            class="text-sm text-action-primary-bg hover:underline"
                            on:click=on_toggle
                        >
                            {move || if use_api.get() { "Use Demo Data" } else { "Refresh" }}
                        </button>
                    </div>
                </div>
                {move || error.get().map(|msg| view! { <p class="text-sm text-status-warning-text">{msg}</p> })}
                {move || {
                    if loading.get() {
                        view! { <p class="text-center text-fg-muted py-5">"Loading AI insights..."</p> }
                            .into_view()
                    } else if data.with(|d| d.insights.is_empty()) {
                        view! { <EmptyState title=NO_AUDIT_INSIGHTS icon="fa-lightbulb"/> }.into_view()
                    } else {
                        data.with(|d| {
                            d.insights
                                .iter()
                                .cloned()
                                .map(|insight| view! { <InsightCard insight=insight/> })
                                .collect_view()
                        })
                    }
                }}
            </section>
            <div class="grid gap-6 lg:grid-cols-2">
                <ChartCard title="Top 5 Spending Categories This Month">
                    <BarChart data=categories format_value=format_currency/>
                </ChartCard>
                <ChartCard title="AI Detected Savings Opportunities">
                    {move || {
                        let opportunities = data.with(|d| d.detected_opportunities.clone());
                        if opportunities.is_empty() {
                            return view! { <EmptyState title="No savings opportunities detected"/> }
                                .into_view();
                        }
                        view! {
                            <ul class="space-y-3">
                                {opportunities
                                    .into_iter()
                                    .map(|o| {
                                        let title = if o.title.is_empty() { o.category.clone() } else { o.title };
                                        view! {
                                            <li class="flex items-start justify-between gap-4">
                                                <div>
                                                    <p class="font-medium">{title}</p>
                                                    <p class="text-sm text-fg-muted">{o.description}</p>
                                                </div>
                                                <span class="badge green">{format_currency(o.amount)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }}
                </ChartCard>
            </div>
        </div>
    }
}

use super::{
    components::{
        next_expanded, AnomalyCharts, AnomalyMetrics, ExplanationCard, FlaggedTable,
        DETECTION_HINTS,
    },
    data::{self, Scenario},
};
use crate::{
    api::{AnomalyStats, ApiClient, FlaggedTransaction},
    components::cards::ChartCard,
    utils::task::spawn_scoped,
};
use futures::future::try_join;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct AnomalyDetectionViewModel {
    pub transactions: RwSignal<Vec<FlaggedTransaction>>,
    pub stats: RwSignal<AnomalyStats>,
    pub scenario: RwSignal<Scenario>,
    client: Rc<ApiClient>,
}

impl AnomalyDetectionViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            transactions: create_rw_signal(data::default_flagged()),
            stats: create_rw_signal(data::default_stats()),
            scenario: create_rw_signal(Scenario::All),
            client,
        }
    }

    /// Both requests must succeed; otherwise the current values stay.
    pub async fn load(&self) {
        let joined = try_join(self.client.get_anomalies(), self.client.get_anomaly_stats()).await;
        match joined {
            Ok((transactions, stats)) => {
                self.transactions.set(transactions);
                self.stats.set(stats);
            }
            Err(err) => log::error!("anomaly data not loaded, keeping defaults: {}", err),
        }
    }

    pub fn visible(&self) -> Signal<Vec<FlaggedTransaction>> {
        let transactions = self.transactions;
        let scenario = self.scenario;
        Signal::derive(move || {
            let scenario = scenario.get();
            transactions.with(|rows| {
                rows.iter()
                    .filter(|tx| scenario.matches(tx))
                    .cloned()
                    .collect()
            })
        })
    }
}

#[component]
pub fn AnomalyDetectionPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AnomalyDetectionViewModel::new(Rc::new(api));
    let load_vm = vm.clone();
    create_effect(move |_| {
        let vm = load_vm.clone();
        spawn_scoped(async move { vm.load().await });
    });

    let scenario = vm.scenario;
    let visible = vm.visible();
    let stats = vm.stats;
    let expanded = create_rw_signal(None::<usize>);
    let on_decide = Callback::new(|(id, approve): (String, bool)| {
        if approve {
            log::info!("validated flagged transaction {}", id);
        } else {
            log::info!("rejected flagged transaction {}", id);
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <select
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    on:change=move |ev| scenario.set(Scenario::from_label(&event_target_value(&ev)))
                >
                    {Scenario::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.label() selected=move || scenario.get() == s>
                                    {s.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <AnomalyMetrics stats=stats hints=DETECTION_HINTS/>
            <AnomalyCharts stats=stats/>
            <ChartCard title="Flagged Transactions">
                <FlaggedTable rows=visible on_decide=on_decide/>
            </ChartCard>
            <ChartCard title="AI Explainability">
                <div class="space-y-3">
                    {data::detection_explanations()
                        .into_iter()
                        .enumerate()
                        .map(|(index, explanation)| {
                            view! {
                                <ExplanationCard
                                    explanation=explanation
                                    expanded=Signal::derive(move || expanded.get() == Some(index))
                                    on_toggle=Callback::new(move |_| {
                                        expanded.update(|e| *e = next_expanded(*e, index))
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </ChartCard>
        </div>
    }
}

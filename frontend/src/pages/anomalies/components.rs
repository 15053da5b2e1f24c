use super::data::Explanation;
use crate::{
    api::{AnomalyStats, FlaggedTransaction},
    components::cards::{BarChart, BarDatum, ChartCard, StatCard},
    utils::time::format_currency,
};
use leptos::*;

/// Hints under the four metric cards, in display order.
pub type MetricHints = [&'static str; 4];

pub const DETECTION_HINTS: MetricHints = [
    "This month",
    "Awaiting admin action",
    "False positives",
    "Detection accuracy",
];

#[component]
pub fn AnomalyMetrics(#[prop(into)] stats: Signal<AnomalyStats>, hints: MetricHints) -> impl IntoView {
    let field = move |f: fn(&AnomalyStats) -> String| Signal::derive(move || stats.with(f));
    view! {
        <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
            <StatCard
                label="Total Flagged"
                value=field(|s| s.total_flagged.to_string())
                hint=hints[0]
                icon="fa-triangle-exclamation"
            />
            <StatCard
                label="Pending Reviews"
                value=field(|s| s.pending_review.to_string())
                hint=hints[1]
                icon="fa-clock"
            />
            <StatCard
                label="Approved After Review"
                value=field(|s| s.approved_after_review.to_string())
                hint=hints[2]
                icon="fa-circle-check"
            />
            <StatCard
                label="AI Accuracy"
                value=field(|s| format!("{}%", s.ai_accuracy))
                hint=hints[3]
                icon="fa-bullseye"
            />
        </div>
    }
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

#[component]
pub fn AnomalyCharts(#[prop(into)] stats: Signal<AnomalyStats>) -> impl IntoView {
    let trend = Signal::derive(move || {
        stats.with(|s| {
            s.trend
                .iter()
                .map(|m| BarDatum::new(m.month.clone(), f64::from(m.count)))
                .collect::<Vec<_>>()
        })
    });
    let reasons = Signal::derive(move || {
        stats.with(|s| {
            s.reasons
                .iter()
                .map(|r| BarDatum::new(r.name.clone(), r.value))
                .collect::<Vec<_>>()
        })
    });
    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <ChartCard title="Anomalies Over Time">
                <BarChart data=trend/>
            </ChartCard>
            <ChartCard title="Anomaly Reason Distribution">
                <BarChart data=reasons format_value=percent/>
            </ChartCard>
        </div>
    }
}

/// Flag table. Row actions appear only when `on_decide` is given.
#[component]
pub fn FlaggedTable(
    #[prop(into)] rows: Signal<Vec<FlaggedTransaction>>,
    #[prop(optional)] on_decide: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    let with_actions = on_decide.is_some();
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-2 pr-4">"Date"</th>
                    <th class="py-2 pr-4">"User"</th>
                    <th class="py-2 pr-4">"Vendor"</th>
                    <th class="py-2 pr-4 text-right">"Amount"</th>
                    <th class="py-2 pr-4">"Reason"</th>
                    <th class="py-2 pr-4">"Severity"</th>
                    <th class="py-2 pr-4">"Confidence"</th>
                    {with_actions.then(|| view! { <th class="py-2">"Actions"</th> })}
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || rows.get()
                    key=|tx| tx.id.clone()
                    children=move |tx| {
                        let id = tx.id.clone();
                        view! {
                            <tr>
                                <td class="py-2 pr-4">{tx.date}</td>
                                <td class="py-2 pr-4">{tx.user}</td>
                                <td class="py-2 pr-4">{tx.vendor}</td>
                                <td class="py-2 pr-4 text-right">{format_currency(tx.amount)}</td>
                                <td class="py-2 pr-4">{tx.reason}</td>
                                <td class="py-2 pr-4">
                                    <span class=tx.severity.badge_class()>{tx.severity.label()}</span>
                                </td>
                                <td class="py-2 pr-4">{format!("{}%", tx.confidence)}</td>
                                {on_decide.map(|decide| {
                                    let approve_id = id.clone();
                                    view! {
                                        <td class="py-2 flex gap-2">
                                            <button
                                                type="button"
                                                class="text-status-success-text"
                                                title="Validate"
                                                on:click=move |_| decide.call((approve_id.clone(), true))
                                            >
                                                <i class="fas fa-check"></i>
                                            </button>
                                            <button
                                                type="button"
                                                class="text-status-error-text"
                                                title="Reject"
                                                on:click=move |_| decide.call((id.clone(), false))
                                            >
                                                <i class="fas fa-xmark"></i>
                                            </button>
                                        </td>
                                    }
                                })}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn ExplanationCard(
    explanation: Explanation,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let severity = explanation.severity;
    let confidence = explanation.confidence;
    view! {
        <article
            class="rounded-lg border border-border p-4 cursor-pointer space-y-2"
            on:click=move |_| on_toggle.call(())
        >
            <div class="flex items-center justify-between gap-2">
                <strong>
                    {format!("{} - {}", explanation.vendor, format_currency(explanation.amount))}
                </strong>
                <div class="flex items-center gap-2">
                    <span class=severity.badge_class()>{severity.label()}</span>
                    <i class=move || {
                        if expanded.get() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }
                    }></i>
                </div>
            </div>
            <p class="text-sm text-fg-muted">{explanation.text}</p>
            <Show when=move || expanded.get()>
                <div class="flex items-center gap-3 text-sm">
                    <span>"AI Confidence"</span>
                    <div class="flex-1 h-2 rounded bg-surface-muted">
                        <div
                            class="h-2 rounded bg-action-primary-bg"
                            style=format!("width: {}%", confidence.clamp(0.0, 100.0))
                        ></div>
                    </div>
                    <span>{format!("{}%", confidence)}</span>
                </div>
            </Show>
        </article>
    }
}

/// Single-open accordion step: clicking the open card closes it.
pub fn next_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_toggles_and_switches() {
        assert_eq!(next_expanded(None, 1), Some(1));
        assert_eq!(next_expanded(Some(1), 1), None);
        assert_eq!(next_expanded(Some(0), 2), Some(2));
    }
}

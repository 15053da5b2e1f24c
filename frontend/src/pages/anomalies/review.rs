use super::{
    components::{next_expanded, AnomalyCharts, AnomalyMetrics, ExplanationCard, FlaggedTable, MetricHints},
    data,
};
use crate::components::cards::ChartCard;
use leptos::*;

const REVIEW_HINTS: MetricHints = [
    "Past month",
    "Pending review status",
    "Past quarter",
    "Detection accuracy",
];

/// Flags raised on the signed-in employee's own expenses.
#[component]
pub fn AnomalyReviewPage() -> impl IntoView {
    let stats = Signal::derive(data::employee_stats);
    let rows = Signal::derive(data::employee_flagged);
    let expanded = create_rw_signal(Some(0_usize));

    view! {
        <div class="space-y-6">
            <AnomalyMetrics stats=stats hints=REVIEW_HINTS/>
            <AnomalyCharts stats=stats/>
            <ChartCard title="Flagged Transactions">
                <FlaggedTable rows=rows/>
            </ChartCard>
            <ChartCard title="Recent Flags">
                <div class="space-y-3">
                    {data::employee_explanations()
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn first_flag_starts_expanded() {
        let html = render_to_string(|| view! { <AnomalyReviewPage/> });
        assert!(html.contains("Unknown Store #42"));
        assert!(html.contains("Past quarter"));
        assert_eq!(html.matches("AI Confidence").count(), 1);
        assert!(!html.contains("title=\"Validate\""));
    }
}

use super::{
    utils::{format_compact_currency, format_money, format_percentage},
    view_model::use_reports_view_model,
};
use crate::{
    api::{ReportInsight, ReportsData},
    components::{
        cards::{BarChart, BarDatum, ChartCard, StatCard},
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::{task::spawn_scoped, time::format_currency},
};
use leptos::*;

#[component]
fn ReportInsightRow(insight: ReportInsight) -> impl IntoView {
    let severity = insight.severity;
    view! {
        <li class=format!("flex items-start gap-3 border-l-4 pl-3 py-2 {}", severity.border_class())>
            <i class=format!("fas {} mt-1", severity.icon())></i>
            <p class="text-sm">{insight.message}</p>
        </li>
    }
}

#[component]
fn ReportBody(data: ReportsData) -> impl IntoView {
    let fixed = |value: String| Signal::derive(move || value.clone());
    let trend: Vec<BarDatum> = data
        .expense_trend_data
        .iter()
        .map(|m| BarDatum::new(m.month.clone(), m.amount))
        .collect();
    let categories: Vec<BarDatum> = data
        .category_spending_data
        .iter()
        .map(|c| BarDatum::new(c.category.clone(), c.amount))
        .collect();
    let insights = data.ai_insights;

    view! {
        <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
            <StatCard label="Total Expenses" value=fixed(format_compact_currency(data.total_expenses)) icon="fa-wallet"/>
            <StatCard label="Compliance Rate" value=fixed(format_percentage(data.compliance_rate)) icon="fa-shield-halved"/>
            <StatCard label="Avg per Transaction" value=fixed(format_money(data.average_per_transaction)) icon="fa-receipt"/>
            <StatCard label="Flagged Items" value=fixed(data.flagged_items.to_string()) icon="fa-flag"/>
        </div>
        <div class="grid gap-6 lg:grid-cols-2">
            <ChartCard title="Expense Trend Over Time">
                <BarChart data=Signal::derive(move || trend.clone()) format_value=format_currency/>
            </ChartCard>
            <ChartCard title="Spending by Category">
                <BarChart data=Signal::derive(move || categories.clone()) format_value=format_currency/>
            </ChartCard>
        </div>
        <ChartCard title="AI-Generated Insights">
            {if insights.is_empty() {
                view! { <EmptyState title="No insights for this period" icon="fa-lightbulb"/> }.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {insights
                            .into_iter()
                            .map(|insight| view! { <ReportInsightRow insight=insight/> })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </ChartCard>
    }
}

/// Spending report shared by the admin and employee dashboards.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = use_reports_view_model();
    let load_vm = vm.clone();
    create_effect(move |_| {
        let vm = load_vm.clone();
        spawn_scoped(async move { vm.load().await });
    });

    let data = vm.data;
    let loading = vm.loading;
    let error = vm.error;

    view! {
        <div class="space-y-6">
            {move || match (loading.get(), error.get(), data.get()) {
                (_, _, Some(data)) => view! { <ReportBody data=data/> }.into_view(),
                (true, _, None) => view! { <LoadingSpinner/> }.into_view(),
                (false, Some(err), None) => {
                    view! { <ErrorMessage message=format!("Error: {}", err)/> }.into_view()
                }
                (false, None, None) => {
                    view! { <EmptyState title="No data available"/> }.into_view()
                }
            }}
        </div>
    }
}

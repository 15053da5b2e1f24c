use leptos::*;

use crate::{
    components::cards::{BarChart, ChartCard, StatCard},
    utils::time::format_currency,
};

pub mod data;

use data::{ExpenseRow, AUDIT_QUEUE, EMPLOYEE_EXPENSES, ORG_METRICS};

fn fixed(value: String) -> Signal<String> {
    Signal::derive(move || value.clone())
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

#[component]
fn ExpenseTable(rows: &'static [ExpenseRow], #[prop(optional)] with_user: bool) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-2 pr-4">"Date"</th>
                    <Show when=move || with_user>
                        <th class="py-2 pr-4">"User"</th>
                    </Show>
                    <th class="py-2 pr-4">"Vendor"</th>
                    <th class="py-2 pr-4">"Category"</th>
                    <th class="py-2 pr-4 text-right">"Amount"</th>
                    <th class="py-2">"Status"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .iter()
                    .map(|row| {
                        view! {
                            <tr data-expense-id=row.id>
                                <td class="py-2 pr-4">{row.date}</td>
                                {with_user.then(|| view! { <td class="py-2 pr-4">{row.user.unwrap_or("-")}</td> })}
                                <td class="py-2 pr-4">{row.vendor}</td>
                                <td class="py-2 pr-4">{row.category}</td>
                                <td class="py-2 pr-4 text-right">{format_currency(row.amount)}</td>
                                <td class="py-2">
                                    <span class=row.status.badge_class()>{row.status.label()}</span>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                {ORG_METRICS
                    .iter()
                    .map(|m| {
                        view! {
                            <StatCard
                                label=m.label
                                value=fixed(m.value.to_string())
                                hint=m.hint
                                icon=m.icon
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <ChartCard title="Spending by Department">
                    <BarChart data=Signal::derive(data::department_spend) format_value=format_currency/>
                </ChartCard>
                <ChartCard title="Monthly Expenses">
                    <BarChart data=Signal::derive(data::quarterly_trend) format_value=format_currency/>
                </ChartCard>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeOverviewPage() -> impl IntoView {
    let summary = data::summarize(EMPLOYEE_EXPENSES);
    view! {
        <div class="space-y-6">
            <div class="grid gap-4 sm:grid-cols-3">
                <StatCard
                    label="Submitted"
                    value=fixed(format_currency(summary.total))
                    hint="Last 30 days"
                    icon="fa-receipt"
                />
                <StatCard
                    label="Pending"
                    value=fixed(summary.pending.to_string())
                    hint="Awaiting approval"
                    icon="fa-clock"
                />
                <StatCard
                    label="Flagged"
                    value=fixed(summary.flagged.to_string())
                    hint="Needs your attention"
                    icon="fa-flag"
                />
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <ChartCard title="Spending by Category">
                    <BarChart data=Signal::derive(data::employee_category_share) format_value=percent/>
                </ChartCard>
                <ChartCard title="Monthly Trend">
                    <BarChart data=Signal::derive(data::employee_monthly_trend) format_value=format_currency/>
                </ChartCard>
            </div>
            <ChartCard title="My Recent Expenses">
                <ExpenseTable rows=EMPLOYEE_EXPENSES/>
            </ChartCard>
        </div>
    }
}

#[component]
pub fn AuditorOverviewPage() -> impl IntoView {
    let summary = data::summarize(AUDIT_QUEUE);
    view! {
        <div class="space-y-6">
            <div class="grid gap-4 sm:grid-cols-3">
                <StatCard
                    label="Under Review"
                    value=fixed(format_currency(summary.total))
                    hint="Open audit queue"
                    icon="fa-magnifying-glass-dollar"
                />
                <StatCard
                    label="Flagged"
                    value=fixed(summary.flagged.to_string())
                    icon="fa-triangle-exclamation"
                />
                <StatCard
                    label="Compliance"
                    value=fixed("94%".to_string())
                    hint="Current quarter"
                    icon="fa-shield-halved"
                />
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <ChartCard title="Compliance Split">
                    <BarChart data=Signal::derive(data::compliance_split) format_value=percent/>
                </ChartCard>
                <ChartCard title="Monthly Compliance">
                    <BarChart data=Signal::derive(data::monthly_compliance) format_value=percent/>
                </ChartCard>
            </div>
            <ChartCard title="Audit Queue">
                <ExpenseTable rows=AUDIT_QUEUE with_user=true/>
            </ChartCard>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employee_overview_lists_recent_expenses() {
        let html = render_to_string(|| view! { <EmployeeOverviewPage/> });
        assert!(html.contains("My Recent Expenses"));
        assert!(html.contains("Office Depot"));
        assert!(html.contains("$728"));
        assert!(!html.contains("Sarah Johnson"));
    }

    #[test]
    fn auditor_overview_shows_submitters() {
        let html = render_to_string(|| view! { <AuditorOverviewPage/> });
        assert!(html.contains("Sarah Johnson"));
        assert!(html.contains("$5,900"));
        assert!(html.contains("Non-Compliant"));
    }

    #[test]
    fn admin_overview_renders_metrics() {
        let html = render_to_string(|| view! { <AdminOverviewPage/> });
        assert!(html.contains("Pending Approvals"));
        assert!(html.contains("Spending by Department"));
    }
}

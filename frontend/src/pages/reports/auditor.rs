use super::utils::format_compact_currency;
use crate::{
    components::cards::{BarChart, BarDatum, ChartCard, StatCard},
    utils::time::format_currency,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub flagged_amount: f64,
    pub total_expenses: f64,
}

const fn point(month: &'static str, flagged_amount: f64, total_expenses: f64) -> TrendPoint {
    TrendPoint {
        month,
        flagged_amount,
        total_expenses,
    }
}

/// Oldest month first.
pub const EXPENSE_TREND: &[TrendPoint] = &[
    point("Jan", 5000.0, 32000.0),
    point("Feb", 4800.0, 30500.0),
    point("Mar", 5200.0, 31200.0),
    point("Apr", 4500.0, 30800.0),
    point("May", 5100.0, 32500.0),
    point("Jun", 4700.0, 31800.0),
    point("Jul", 5600.0, 33200.0),
    point("Aug", 5300.0, 32100.0),
    point("Sep", 5800.0, 33800.0),
    point("Oct", 5100.0, 32900.0),
];

pub const CATEGORY_SPENDING: &[(&str, f64)] = &[
    ("Travel", 16500.0),
    ("Food", 5800.0),
    ("Office", 4200.0),
    ("IT", 3900.0),
    ("Misc", 2100.0),
];

pub const FRAUD_DETECTION: &[(&str, f64)] = &[
    ("Duplicates", 15.0),
    ("Unusual", 8.0),
    ("Unmatched", 14.0),
    ("Overpaid", 5.0),
];

pub const DEPARTMENTS: [&str; 5] = ["All Departments", "Finance", "HR", "Operations", "Marketing"];
pub const CATEGORIES: [&str; 5] = ["All Categories", "Travel", "Food", "Office", "IT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    LastFiveMonths,
    LastThreeMonths,
    LastYear,
    AllTime,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::LastFiveMonths,
        DateRange::LastThreeMonths,
        DateRange::LastYear,
        DateRange::AllTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::LastFiveMonths => "Last 5 Months",
            DateRange::LastThreeMonths => "Last 3 Months",
            DateRange::LastYear => "Last Year",
            DateRange::AllTime => "All Time",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .unwrap_or_default()
    }

    fn months(&self) -> Option<usize> {
        match self {
            DateRange::LastFiveMonths => Some(5),
            DateRange::LastThreeMonths => Some(3),
            DateRange::LastYear => Some(12),
            DateRange::AllTime => None,
        }
    }
}

/// Most recent months covered by `range`, oldest first.
pub fn trend_window(trend: &[TrendPoint], range: DateRange) -> &[TrendPoint] {
    match range.months() {
        Some(months) => &trend[trend.len().saturating_sub(months)..],
        None => trend,
    }
}

/// "All Categories" keeps every row; anything else keeps its own row only.
pub fn category_rows(category: &str) -> Vec<BarDatum> {
    CATEGORY_SPENDING
        .iter()
        .filter(|(name, _)| category == CATEGORIES[0] || *name == category)
        .map(|(name, amount)| BarDatum::new(*name, *amount))
        .collect()
}

pub fn flagged_total(window: &[TrendPoint]) -> f64 {
    window.iter().map(|p| p.flagged_amount).sum()
}

fn fixed(value: &'static str) -> Signal<String> {
    Signal::derive(move || value.to_string())
}

#[component]
fn FilterSelect(
    label: &'static str,
    icon: &'static str,
    options: Vec<&'static str>,
    selected: Signal<&'static str>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-2 text-sm font-medium text-fg-muted">
            <span><i class=format!("fas {} mr-2", icon)></i>{label}</span>
            <select
                class="rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm"
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option selected=move || selected.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn ReportNote(icon: &'static str, title: &'static str, body: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex gap-3 rounded-lg border p-4 {}", tone)>
            <i class=format!("fas {} mt-1", icon)></i>
            <div>
                <p class="font-semibold">{title}</p>
                <p class="text-sm text-fg-muted">{body}</p>
            </div>
        </div>
    }
}

/// Auditor reports over bundled figures; the filters narrow the charts client-side.
#[component]
pub fn AuditorReportsPage() -> impl IntoView {
    let range = create_rw_signal(DateRange::default());
    let department = create_rw_signal(DEPARTMENTS[0]);
    let category = create_rw_signal(CATEGORIES[0]);

    let window = create_memo(move |_| trend_window(EXPENSE_TREND, range.get()).to_vec());
    let totals = Signal::derive(move || {
        window.with(|w| {
            w.iter()
                .map(|p| BarDatum::new(p.month, p.total_expenses))
                .collect::<Vec<_>>()
        })
    });
    let flagged = Signal::derive(move || {
        window.with(|w| {
            w.iter()
                .map(|p| BarDatum::new(p.month, p.flagged_amount))
                .collect::<Vec<_>>()
        })
    });
    let flagged_in_window = Signal::derive(move || window.with(|w| format_compact_currency(flagged_total(w))));
    let categories = Signal::derive(move || category_rows(category.get()));
    let fraud = Signal::derive(|| {
        FRAUD_DETECTION
            .iter()
            .map(|(name, count)| BarDatum::new(*name, *count))
            .collect::<Vec<_>>()
    });
    let scope = move || {
        format!(
            "Showing {}, {}, {}",
            range.get().label(),
            department.get(),
            category.get()
        )
    };

    let pick = |options: &'static [&'static str], target: RwSignal<&'static str>| {
        Callback::new(move |value: String| {
            if let Some(found) = options.iter().find(|o| **o == value) {
                target.set(*found);
            }
        })
    };

    view! {
        <div class="space-y-6">
            <div class="grid gap-4 md:grid-cols-3">
                <FilterSelect
                    label="Date Range"
                    icon="fa-calendar"
                    options=DateRange::ALL.iter().map(DateRange::label).collect()
                    selected=Signal::derive(move || range.get().label())
                    on_change=Callback::new(move |value: String| range.set(DateRange::from_label(&value)))
                />
                <FilterSelect
                    label="Department"
                    icon="fa-building"
                    options=DEPARTMENTS.to_vec()
                    selected=department.into()
                    on_change=pick(&DEPARTMENTS[..], department)
                />
                <FilterSelect
                    label="Category"
                    icon="fa-chart-pie"
                    options=CATEGORIES.to_vec()
                    selected=category.into()
                    on_change=pick(&CATEGORIES[..], category)
                />
            </div>
            <p class="text-xs text-fg-muted">{scope}</p>
            <ChartCard title="Expense Trend Over Time">
                <div class="grid gap-6 lg:grid-cols-2">
                    <div>
                        <p class="text-sm font-medium mb-2">"Total Expenses"</p>
                        <BarChart data=totals format_value=format_currency/>
                    </div>
                    <div>
                        <p class="text-sm font-medium mb-2">"Flagged Amount"</p>
                        <BarChart data=flagged format_value=format_currency/>
                    </div>
                </div>
            </ChartCard>
            <div class="grid gap-6 lg:grid-cols-2">
                <ChartCard title="Category-Wise Spending">
                    <BarChart data=categories format_value=format_currency/>
                </ChartCard>
                <ChartCard title="Fraud Detection Statistics">
                    <BarChart data=fraud/>
                </ChartCard>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <StatCard label="Total Analyzed" value=fixed("172") hint="Transactions" icon="fa-magnifying-glass"/>
                <StatCard label="Clean Data" value=fixed("97.7%") hint="No issues detected" icon="fa-circle-check"/>
                <StatCard label="Flagged Amounts" value=flagged_in_window hint="Under review" icon="fa-flag"/>
                <StatCard label="Avg Resolution" value=fixed("2.3") hint="Days" icon="fa-clock"/>
            </div>
            <ChartCard title="AI-Generated Insights">
                <div class="space-y-3">
                    <ReportNote
                        icon="fa-chart-column"
                        title="Spending Pattern"
                        body="Travel expenses have increased by 23% compared to last quarter. This aligns with the Q4 conference season. IT spending remains consistent with budget allocations."
                        tone="border-status-info-border"
                    />
                    <ReportNote
                        icon="fa-triangle-exclamation"
                        title="Anomaly Alert"
                        body="2 duplicate transactions detected in October. The AI flagged these for manual review. Average resolution time for similar issues is 1.8 days."
                        tone="border-status-warning-border"
                    />
                </div>
            </ChartCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_keeps_latest_months() {
        let months = |range| {
            trend_window(EXPENSE_TREND, range)
                .iter()
                .map(|p| p.month)
                .collect::<Vec<_>>()
        };
        assert_eq!(months(DateRange::LastThreeMonths), ["Aug", "Sep", "Oct"]);
        assert_eq!(months(DateRange::LastFiveMonths), ["Jun", "Jul", "Aug", "Sep", "Oct"]);
        assert_eq!(months(DateRange::LastYear).len(), EXPENSE_TREND.len());
        assert_eq!(months(DateRange::AllTime).len(), EXPENSE_TREND.len());
    }

    #[test]
    fn date_range_labels_parse_back() {
        for range in DateRange::ALL {
            assert_eq!(DateRange::from_label(range.label()), range);
        }
        assert_eq!(DateRange::from_label("Yesterday"), DateRange::LastFiveMonths);
    }

    #[test]
    fn category_filter_narrows_rows() {
        assert_eq!(category_rows("All Categories").len(), CATEGORY_SPENDING.len());
        let travel = category_rows("Travel");
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].value, 16500.0);
        assert!(category_rows("Legal").is_empty());
    }

    #[test]
    fn flagged_total_follows_window() {
        assert_eq!(
            flagged_total(trend_window(EXPENSE_TREND, DateRange::LastThreeMonths)),
            16_200.0
        );
        assert_eq!(
            flagged_total(trend_window(EXPENSE_TREND, DateRange::LastFiveMonths)),
            26_500.0
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_charts_filters_and_insights() {
        let html = render_to_string(|| view! { <AuditorReportsPage/> });
        assert!(html.contains("Expense Trend Over Time"));
        assert!(html.contains("Category-Wise Spending"));
        assert!(html.contains("Fraud Detection Statistics"));
        assert!(html.contains("Spending Pattern"));
        assert!(html.contains("Anomaly Alert"));
        assert!(html.contains("Showing Last 5 Months, All Departments, All Categories"));
        assert!(html.contains("Duplicates"));
        assert!(html.contains("$16,500"));
        assert!(html.contains("$26.5K"));
        assert!(!html.contains("Jan"));
    }
}

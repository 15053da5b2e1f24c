use leptos::*;

use crate::api::Insight;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg px-4 py-5 sm:p-6">
            <div class="flex items-center justify-between">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                {icon.map(|icon| view! { <i class=format!("fas {} text-fg-muted", icon)></i> })}
            </div>
            <dd class="mt-2 text-2xl font-semibold text-fg">{move || value.get()}</dd>
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
        </div>
    }
}

#[component]
pub fn ChartCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-5">
            <h3 class="text-base font-semibold text-fg mb-4">{title}</h3>
            {children()}
        </section>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Width of each bar in percent of the largest value.
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| {
            if max <= 0.0 || *v <= 0.0 {
                0.0
            } else {
                (v / max * 100.0).clamp(0.0, 100.0)
            }
        })
        .collect()
}

fn plain_number(value: f64) -> String {
    format!("{}", value)
}

/// Horizontal proportional bars.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<BarDatum>>,
    #[prop(default = plain_number)] format_value: fn(f64) -> String,
) -> impl IntoView {
    let rows = move || {
        let data = data.get();
        let widths = bar_widths(&data.iter().map(|d| d.value).collect::<Vec<_>>());
        data.into_iter()
            .zip(widths)
            .map(|(datum, width)| {
                view! {
                    <div class="flex items-center gap-3 text-sm">
                        <span class="w-28 shrink-0 truncate text-fg-muted">{datum.label}</span>
                        <div class="flex-1 h-3 rounded bg-surface-muted">
                            <div
                                class="h-3 rounded bg-action-primary-bg"
                                style=format!("width: {:.1}%", width)
                            ></div>
                        </div>
                        <span class="w-20 text-right text-fg">{format_value(datum.value)}</span>
                    </div>
                }
            })
            .collect_view()
    };
    view! {
        <div class="space-y-2">
            {move || {
                if data.with(Vec::is_empty) {
                    view! { <p class="text-sm text-fg-muted">"No data"</p> }.into_view()
                } else {
                    rows().into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn InsightCard(insight: Insight) -> impl IntoView {
    let kind = insight.kind;
    view! {
        <article class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <div class="flex items-center justify-between gap-2">
                <h4 class="font-semibold text-fg">{insight.title}</h4>
                <span class=kind.badge_class()>{kind.badge_text()}</span>
            </div>
            <p class="text-sm text-fg-muted">{insight.description}</p>
            {insight.details.map(|d| view! { <p class="text-xs text-fg-muted">{d}</p> })}
            {insight.status.map(|s| view! { <p class="text-xs font-medium text-fg">{s}</p> })}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_widths_scale_to_largest_value() {
        assert_eq!(bar_widths(&[50.0, 100.0, 25.0]), vec![50.0, 100.0, 25.0]);
        assert_eq!(bar_widths(&[8500.0, 1700.0]), vec![100.0, 20.0]);
    }

    #[test]
    fn bar_widths_handle_zero_and_negative() {
        assert_eq!(bar_widths(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(bar_widths(&[-5.0, 10.0]), vec![0.0, 100.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}

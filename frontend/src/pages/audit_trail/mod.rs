use leptos::*;

use crate::components::{
    cards::{ChartCard, StatCard},
    empty_state::EmptyState,
};

pub mod data;

use data::{filter_log, summarize, timeline, ActionFilter, ActivityEntry, ACTIVITY_LOG};

const TIMELINE_LENGTH: usize = 5;

fn fixed(value: usize) -> Signal<String> {
    Signal::derive(move || value.to_string())
}

#[component]
fn ActivityRow(entry: ActivityEntry) -> impl IntoView {
    view! {
        <tr data-activity-id=entry.id>
            <td class="py-2 pr-4 whitespace-nowrap">{entry.timestamp}</td>
            <td class="py-2 pr-4">{entry.user}</td>
            <td class="py-2 pr-4">
                <span class=entry.kind.badge_class()>{entry.action}</span>
            </td>
            <td class="py-2 pr-4">{entry.details}</td>
            <td class="py-2 font-mono text-xs text-fg-muted">{entry.ip_address}</td>
        </tr>
    }
}

#[component]
fn RecentTimeline() -> impl IntoView {
    view! {
        <ol class="space-y-4">
            {timeline(ACTIVITY_LOG, TIMELINE_LENGTH)
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="flex gap-3">
                            <span class=entry.kind.badge_class()>
                                <i class="fas fa-circle text-[6px]"></i>
                            </span>
                            <div>
                                <p class="text-sm font-medium">
                                    {entry.user} " " {entry.action.to_lowercase()}
                                </p>
                                <p class="text-xs text-fg-muted">{entry.details}</p>
                                <p class="text-xs text-fg-muted">{entry.timestamp}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn AuditTrailPage() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let filter = create_rw_signal(ActionFilter::All);
    let visible = create_memo(move |_| {
        let filter = filter.get();
        query.with(|q| {
            filter_log(ACTIVITY_LOG, q, filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let summary = summarize(ACTIVITY_LOG);

    view! {
        <div class="space-y-6">
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <StatCard label="Total Activities" value=fixed(summary.total) hint="Last 30 days" icon="fa-list"/>
                <StatCard label="Approvals" value=fixed(summary.approvals) hint="Actions completed" icon="fa-circle-check"/>
                <StatCard
                    label="Flags/Rejections"
                    value=fixed(summary.flags_and_rejections)
                    hint="Issues actioned"
                    icon="fa-flag"
                />
                <StatCard label="Reports Generated" value=fixed(summary.reports) hint="Last 7 days" icon="fa-file-lines"/>
            </div>
            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="search"
                    class="flex-1 rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm"
                    placeholder="Search activities by user, action, or vendor..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm"
                    on:change=move |ev| filter.set(ActionFilter::from_label(&event_target_value(&ev)))
                >
                    {ActionFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.label() selected=move || filter.get() == f>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="grid gap-6 xl:grid-cols-3">
                <div class="xl:col-span-2">
                    <ChartCard title=format!("Activity Log ({} entries)", ACTIVITY_LOG.len())>
                        <Show
                            when=move || visible.with(|rows| !rows.is_empty())
                            fallback=|| view! {
                                <EmptyState
                                    title="No matching activity"
                                    description="Try a different search or action filter."
                                    icon="fa-magnifying-glass"
                                />
                            }
                        >
                            <table class="min-w-full divide-y divide-border text-sm">
                                <thead>
                                    <tr class="text-left text-fg-muted">
                                        <th class="py-2 pr-4">"Timestamp"</th>
                                        <th class="py-2 pr-4">"User"</th>
                                        <th class="py-2 pr-4">"Action"</th>
                                        <th class="py-2 pr-4">"Details"</th>
                                        <th class="py-2">"IP Address"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    <For
                                        each=move || visible.get()
                                        key=|entry| entry.id
                                        children=|entry| view! { <ActivityRow entry=entry/> }
                                    />
                                </tbody>
                            </table>
                        </Show>
                    </ChartCard>
                </div>
                <ChartCard title="Recent Activity Timeline">
                    <RecentTimeline/>
                </ChartCard>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_log_metrics_and_timeline() {
        let html = render_to_string(|| view! { <AuditTrailPage/> });
        assert!(html.contains("Activity Log (10 entries)"));
        assert!(html.contains("Recent Activity Timeline"));
        assert!(html.contains("Search activities by user, action, or vendor..."));
        assert!(html.contains("Generated Reports"));
        assert!(html.contains("ABC Taxi Service - $2,500"));
        assert_eq!(html.matches("data-activity-id").count(), 10);
    }
}

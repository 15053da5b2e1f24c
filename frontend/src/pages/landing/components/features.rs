use crate::pages::landing::utils::FEATURE_CARDS;
use leptos::*;

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="grid gap-4">
            {FEATURE_CARDS
                .iter()
                .map(|card| {
                    view! {
                        <div class="flex gap-4 rounded-lg bg-surface-elevated p-4 shadow">
                            <i class=format!("fas {} text-2xl text-action-primary-bg", card.icon)></i>
                            <div>
                                <h3 class="font-semibold text-fg">{card.title}</h3>
                                <p class="text-sm text-fg-muted">{card.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

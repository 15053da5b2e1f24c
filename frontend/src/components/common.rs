use leptos::*;

use crate::utils::message::MessageState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Pill-style tab strip. `active` holds the selected key.
#[component]
pub fn TabBar<K>(tabs: Vec<(K, &'static str)>, active: RwSignal<K>) -> impl IntoView
where
    K: Copy + PartialEq + 'static,
{
    view! {
        <div class="flex gap-2 border-b border-border mb-4" role="tablist">
            {tabs
                .into_iter()
                .map(|(key, label)| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="px-4 py-2 text-sm font-medium border-b-2 -mb-px"
                            class:border-action-primary-bg=move || active.get() == key
                            class:border-transparent=move || active.get() != key
                            aria-selected=move || (active.get() == key).to_string()
                            on:click=move |_| active.set(key)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Success or error banner; renders nothing while the state is empty.
#[component]
pub fn MessageBanner(#[prop(into)] message: Signal<MessageState>) -> impl IntoView {
    move || {
        let state = message.get();
        if let Some(error) = state.error {
            view! {
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm" role="alert">
                    {error}
                </div>
            }
            .into_view()
        } else if let Some(success) = state.success {
            view! {
                <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded text-sm" role="status">
                    {success}
                </div>
            }
            .into_view()
        } else {
            ().into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variant_includes_primary_class() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("bg-action-primary-bg"));
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(ButtonVariant::Secondary.classes(), ButtonVariant::Ghost.classes());
    }
}

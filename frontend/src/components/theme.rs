use crate::state::theme::{use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();
    let is_dark = move || current_theme.get() == Theme::Dark;

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-surface-muted transition-colors focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:ring-offset-2"
            on:click=move |_| theme_state.toggle()
            aria-label=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            data-theme-value=move || current_theme.get().as_str()
        >
            <span class="sr-only">"Toggle theme"</span>
            <span
                class=move || {
                    if is_dark() {
                        "inline-block h-4 w-4 transform rounded-full transition-transform translate-x-6 bg-action-primary-bg"
                    } else {
                        "inline-block h-4 w-4 transform rounded-full transition-transform translate-x-1 bg-white"
                    }
                }
            />
            <span
                class="absolute left-1 top-1/2 -translate-y-1/2 text-xs text-fg-muted transition-opacity"
                class:opacity-0=move || !is_dark()
            >
                <i class="fas fa-moon"></i>
            </span>
            <span
                class="absolute right-1 top-1/2 -translate-y-1/2 text-xs text-status-warning-text transition-opacity"
                class:opacity-0=is_dark
            >
                <i class="fas fa-sun"></i>
            </span>
        </button>
    }
}

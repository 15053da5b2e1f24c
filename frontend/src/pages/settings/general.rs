use crate::{
    api::Role,
    components::common::{Button, ButtonVariant},
    state::theme::{use_theme, Theme},
    utils::dom,
};
use leptos::*;

pub const TONES: [(&str, &str); 3] = [
    ("professional", "Professional"),
    ("friendly", "Friendly"),
    ("casual", "Casual"),
];
pub const THRESHOLD_RANGE: (u8, u8) = (80, 100);
const DEFAULT_THRESHOLD: u8 = 95;

/// Session-local preferences; nothing here is sent to the server.
#[derive(Clone, Copy)]
pub struct GeneralSettingsForm {
    pub display_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub ai_enabled: RwSignal<bool>,
    pub tone: RwSignal<String>,
    pub threshold: RwSignal<u8>,
}

impl GeneralSettingsForm {
    pub fn for_role(role: Role) -> Self {
        Self {
            display_name: create_rw_signal(role.default_user_name().to_string()),
            email: create_rw_signal(format!("{}@example.com", role.as_str())),
            ai_enabled: create_rw_signal(true),
            tone: create_rw_signal(TONES[0].0.to_string()),
            threshold: create_rw_signal(DEFAULT_THRESHOLD),
        }
    }
}

/// `"auto"` follows the system preference, dark when unknown.
pub fn theme_choice(value: &str, system_dark: Option<bool>) -> Option<Theme> {
    match value {
        "auto" => Some(if system_dark == Some(false) {
            Theme::Light
        } else {
            Theme::Dark
        }),
        other => Theme::parse(other),
    }
}

fn clamp_threshold(raw: &str) -> u8 {
    let (min, max) = THRESHOLD_RANGE;
    raw.trim()
        .parse::<u8>()
        .map(|v| v.clamp(min, max))
        .unwrap_or(DEFAULT_THRESHOLD)
}

#[component]
fn SettingsCard(
    #[prop(into)] title: String,
    icon: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
            <h3 class="flex items-center gap-2 font-semibold">
                <i class=format!("fas {}", icon)></i>
                {title}
            </h3>
            {children()}
        </section>
    }
}

#[component]
pub fn GeneralSettingsPage(role: Role) -> impl IntoView {
    let form = GeneralSettingsForm::for_role(role);
    let theme = use_theme();
    let current_theme = theme.current();
    let on_theme = move |ev: ev::Event| {
        if let Some(choice) = theme_choice(&event_target_value(&ev), dom::prefers_dark_scheme()) {
            theme.set_theme(choice);
        }
    };
    let (min, max) = THRESHOLD_RANGE;

    view! {
        <div class="space-y-6 max-w-3xl">
            <header class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">
                    <i class="fas fa-gear mr-2"></i>
                    "Settings"
                </h2>
                <span class="badge blue">{role.label()}</span>
            </header>
            <SettingsCard title="Profile" icon="fa-user">
                <label class="block text-sm">
                    <span class="text-fg-muted">"Display Name"</span>
                    <input
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        prop:value=move || form.display_name.get()
                        on:input=move |ev| form.display_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"Email"</span>
                    <input
                        type="email"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </label>
            </SettingsCard>
            <SettingsCard title="AI Assistant Settings" icon="fa-comment-dots">
                <label class="flex items-center gap-2 text-sm">
                    <input
                        type="checkbox"
                        prop:checked=move || form.ai_enabled.get()
                        on:change=move |ev| form.ai_enabled.set(event_target_checked(&ev))
                    />
                    "Enable Smart Auditor AI"
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"Response Tone"</span>
                    <select
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        on:change=move |ev| form.tone.set(event_target_value(&ev))
                    >
                        {TONES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value selected=move || form.tone.with(|t| t == value)>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"AI Accuracy Threshold"</span>
                    <div class="flex items-center gap-3">
                        <input
                            type="range"
                            min=min
                            max=max
                            class="flex-1"
                            prop:value=move || form.threshold.get().to_string()
                            on:input=move |ev| form.threshold.set(clamp_threshold(&event_target_value(&ev)))
                        />
                        <span class="w-12 text-right">{move || format!("{}%", form.threshold.get())}</span>
                    </div>
                </label>
            </SettingsCard>
            <SettingsCard title="App Preferences" icon="fa-sliders">
                <label class="block text-sm">
                    <span class="text-fg-muted">"Theme"</span>
                    <select
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        on:change=on_theme
                    >
                        <option value="dark" selected=move || current_theme.get() == Theme::Dark>"Dark"</option>
                        <option value="light" selected=move || current_theme.get() == Theme::Light>"Light"</option>
                        <option value="auto">"Auto"</option>
                    </select>
                </label>
            </SettingsCard>
            <SettingsCard title="Quick Actions" icon="fa-upload">
                <div class="flex gap-3">
                    <Button on:click=move |_| log::info!("upload receipt requested") attr:type="button">
                        <i class="fas fa-upload mr-2"></i>
                        "Upload Receipt"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on:click=move |_| log::info!("expense analysis requested")
                        attr:type="button"
                    >
                        <i class="fas fa-gear mr-2"></i>
                        "Analyze Expenses"
                    </Button>
                </div>
            </SettingsCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn form_defaults_follow_role() {
        with_runtime(|| {
            let form = GeneralSettingsForm::for_role(Role::Auditor);
            assert_eq!(form.display_name.get_untracked(), "Auditor User");
            assert_eq!(form.email.get_untracked(), "auditor@example.com");
            assert_eq!(form.threshold.get_untracked(), 95);
            assert!(form.ai_enabled.get_untracked());
        });
    }

    #[test]
    fn theme_choice_resolves_auto() {
        assert_eq!(theme_choice("light", None), Some(Theme::Light));
        assert_eq!(theme_choice("auto", Some(false)), Some(Theme::Light));
        assert_eq!(theme_choice("auto", None), Some(Theme::Dark));
        assert_eq!(theme_choice("sepia", None), None);
    }

    #[test]
    fn threshold_stays_in_range() {
        assert_eq!(clamp_threshold("50"), 80);
        assert_eq!(clamp_threshold("99"), 99);
        assert_eq!(clamp_threshold("x"), 95);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_app, ssr::render_to_string};

    #[test]
    fn renders_role_defaults_and_sections() {
        let html = render_to_string(|| {
            provide_app(None);
            view! { <GeneralSettingsPage role=Role::Admin/> }
        });
        assert!(html.contains("AI Assistant Settings"));
        assert!(html.contains("App Preferences"));
        assert!(html.contains("Enable Smart Auditor AI"));
        assert!(html.contains("Upload Receipt"));
        assert!(html.contains("Analyze Expenses"));
    }
}

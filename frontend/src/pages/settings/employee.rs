use crate::{
    api::{ApiClient, ApiError, EmployeeSettings},
    components::{
        common::{Button, MessageBanner, TabBar},
        layout::LoadingSpinner,
    },
    config,
    utils::{
        message::MessageState,
        task::{spawn_scoped, TaskSlot},
        time::sleep,
    },
};
use leptos::*;
use std::rc::Rc;

pub const LOAD_FAILED: &str = "Failed to load settings";
pub const SAVE_FAILED: &str = "Failed to save settings";
pub const RESPONSE_TONES: [(&str, &str); 3] = [
    ("professional", "Professional"),
    ("casual", "Casual"),
    ("formal", "Formal"),
];
const DEFAULT_THRESHOLD: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Ai,
    Notifications,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 3] = [
        SettingsSection::Profile,
        SettingsSection::Ai,
        SettingsSection::Notifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Ai => "AI Settings",
            SettingsSection::Notifications => "Notifications",
        }
    }

    fn save_label(&self) -> &'static str {
        match self {
            SettingsSection::Profile => "Save Changes",
            SettingsSection::Ai => "Save AI Settings",
            SettingsSection::Notifications => "Save Notification Settings",
        }
    }
}

pub fn saved_message(section: Option<SettingsSection>) -> &'static str {
    match section {
        Some(SettingsSection::Profile) => "Profile settings saved successfully",
        Some(SettingsSection::Ai) => "AI settings saved successfully",
        Some(SettingsSection::Notifications) => "Notification settings saved successfully",
        None => "Settings saved successfully",
    }
}

/// Server-provided reason when there is one.
fn save_failure_text(err: &ApiError) -> String {
    if err.code == "SERVER_ERROR" {
        err.error.clone()
    } else {
        SAVE_FAILED.to_string()
    }
}

/// Unparseable input falls back to the default; values above 100 clamp.
pub fn parse_threshold(raw: &str) -> u8 {
    raw.trim()
        .parse::<u32>()
        .map(|v| v.min(100) as u8)
        .unwrap_or(DEFAULT_THRESHOLD)
}

#[derive(Clone)]
pub struct EmployeeSettingsViewModel {
    pub settings: RwSignal<EmployeeSettings>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub active_tab: RwSignal<SettingsSection>,
    save_task: TaskSlot,
    client: Rc<ApiClient>,
}

impl EmployeeSettingsViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            settings: create_rw_signal(EmployeeSettings::default()),
            loading: create_rw_signal(true),
            saving: create_rw_signal(false),
            message: create_rw_signal(MessageState::default()),
            active_tab: create_rw_signal(SettingsSection::Profile),
            save_task: TaskSlot::new(),
            client,
        }
    }

    pub async fn load(&self) {
        self.loading.set(true);
        match self.client.get_employee_settings().await {
            Ok(settings) => self.settings.set(settings),
            Err(err) => {
                log::error!("employee settings not loaded: {}", err);
                self.message.update(|m| m.set_error(LOAD_FAILED));
            }
        }
        self.loading.set(false);
    }

    /// Starts a save unless one is in flight. A newer save replaces the
    /// pending auto-clear of the previous message.
    pub fn request_save(&self, section: SettingsSection) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = self.clone();
        self.save_task.restart(async move { vm.save(Some(section)).await });
    }

    /// Sends every section; the success notice names the one that was edited.
    pub async fn save(&self, section: Option<SettingsSection>) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        self.message.update(MessageState::clear);
        let settings = self.settings.get_untracked();
        let result = self.client.save_employee_settings(&settings).await;
        self.saving.set(false);

        match result {
            Ok(()) => {
                let shown = MessageState {
                    success: Some(saved_message(section).to_string()),
                    error: None,
                };
                self.message.set(shown.clone());
                sleep(config::SETTINGS_MESSAGE_TTL).await;
                // A newer message replaces this one on its own schedule.
                if self.message.get_untracked() == shown {
                    self.message.update(MessageState::clear);
                }
            }
            Err(err) => {
                log::warn!("employee settings not saved: {}", err);
                self.message.update(|m| m.set_error(save_failure_text(&err)));
            }
        }
    }
}

pub fn use_employee_settings_view_model() -> EmployeeSettingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    EmployeeSettingsViewModel::new(Rc::new(api))
}

#[component]
fn SaveButton(vm: EmployeeSettingsViewModel, section: SettingsSection) -> impl IntoView {
    let saving = vm.saving;
    let on_save = move |_| vm.request_save(section);
    view! {
        <Button loading=saving on:click=on_save attr:type="button">
            {move || if saving.get() { "Saving..." } else { section.save_label() }}
        </Button>
    }
}

#[component]
fn ProfileTab(vm: EmployeeSettingsViewModel) -> impl IntoView {
    let settings = vm.settings;
    view! {
        <div class="space-y-4">
            <div class="grid gap-4 sm:grid-cols-2">
                <label class="block text-sm">
                    <span class="text-fg-muted">"Full Name"</span>
                    <input
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        prop:value=move || settings.with(|s| s.profile.display_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.profile.display_name = value);
                        }
                    />
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"Email Address"</span>
                    <input
                        type="email"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        prop:value=move || settings.with(|s| s.profile.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.profile.email = value);
                        }
                    />
                </label>
            </div>
            <SaveButton vm=vm section=SettingsSection::Profile/>
        </div>
    }
}

#[component]
fn AiTab(vm: EmployeeSettingsViewModel) -> impl IntoView {
    let settings = vm.settings;
    view! {
        <div class="space-y-4">
            <div class="grid gap-4 sm:grid-cols-3">
                <label class="block text-sm">
                    <span class="text-fg-muted">"Enable Anomaly Detection"</span>
                    <select
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        on:change=move |ev| {
                            let enabled = event_target_value(&ev) == "enabled";
                            settings.update(|s| s.ai.enabled = enabled);
                        }
                    >
                        <option value="enabled" selected=move || settings.with(|s| s.ai.enabled)>
                            "Enabled"
                        </option>
                        <option value="disabled" selected=move || settings.with(|s| !s.ai.enabled)>
                            "Disabled"
                        </option>
                    </select>
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"Confidence Threshold (%)"</span>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        prop:value=move || settings.with(|s| s.ai.accuracy_threshold.to_string())
                        on:input=move |ev| {
                            let threshold = parse_threshold(&event_target_value(&ev));
                            settings.update(|s| s.ai.accuracy_threshold = threshold);
                        }
                    />
                </label>
                <label class="block text-sm">
                    <span class="text-fg-muted">"Response Tone"</span>
                    <select
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2"
                        on:change=move |ev| {
                            let tone = event_target_value(&ev);
                            settings.update(|s| s.ai.response_tone = tone);
                        }
                    >
                        {RESPONSE_TONES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option
                                        value=value
                                        selected=move || settings.with(|s| s.ai.response_tone == value)
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <SaveButton vm=vm section=SettingsSection::Ai/>
        </div>
    }
}

#[component]
fn Toggle(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.call(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[component]
fn NotificationsTab(vm: EmployeeSettingsViewModel) -> impl IntoView {
    let settings = vm.settings;
    view! {
        <div class="space-y-4">
            <div class="grid gap-4 sm:grid-cols-2">
                <fieldset class="space-y-2">
                    <legend class="text-sm text-fg-muted">"Email Notifications"</legend>
                    <Toggle
                        label="Expense notifications"
                        checked=Signal::derive(move || settings.with(|s| s.notifications.email))
                        on_change=Callback::new(move |on| settings.update(|s| s.notifications.email = on))
                    />
                    <Toggle
                        label="Expense alerts"
                        checked=Signal::derive(move || settings.with(|s| s.notifications.expense_alerts))
                        on_change=Callback::new(move |on| {
                            settings.update(|s| s.notifications.expense_alerts = on)
                        })
                    />
                    <Toggle
                        label="Weekly summary report"
                        checked=Signal::derive(move || settings.with(|s| s.notifications.weekly_reports))
                        on_change=Callback::new(move |on| {
                            settings.update(|s| s.notifications.weekly_reports = on)
                        })
                    />
                </fieldset>
                <fieldset class="space-y-2">
                    <legend class="text-sm text-fg-muted">"In-App Notifications"</legend>
                    <Toggle
                        label="Push notifications"
                        checked=Signal::derive(move || settings.with(|s| s.notifications.push))
                        on_change=Callback::new(move |on| settings.update(|s| s.notifications.push = on))
                    />
                </fieldset>
            </div>
            <SaveButton vm=vm section=SettingsSection::Notifications/>
        </div>
    }
}

#[component]
pub fn EmployeeSettingsPage() -> impl IntoView {
    let vm = use_employee_settings_view_model();
    let load_vm = vm.clone();
    create_effect(move |_| {
        let vm = load_vm.clone();
        spawn_scoped(async move { vm.load().await });
    });

    let loading = vm.loading;
    let active_tab = vm.active_tab;
    let message = vm.message;
    let stored_vm = store_value(vm);
    let tabs = SettingsSection::ALL
        .iter()
        .map(|s| (*s, s.label()))
        .collect::<Vec<_>>();

    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
            <MessageBanner message=message/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <TabBar tabs=tabs.clone() active=active_tab/>
                {move || {
                    let vm = stored_vm.get_value();
                    match active_tab.get() {
                        SettingsSection::Profile => view! { <ProfileTab vm=vm/> }.into_view(),
                        SettingsSection::Ai => view! { <AiTab vm=vm/> }.into_view(),
                        SettingsSection::Notifications => {
                            view! { <NotificationsTab vm=vm/> }.into_view()
                        }
                    }
                }}
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_messages_and_keys() {
        assert_eq!(saved_message(Some(SettingsSection::Ai)), "AI settings saved successfully");
        assert_eq!(saved_message(None), "Settings saved successfully");
        let labels: Vec<_> = SettingsSection::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Profile", "AI Settings", "Notifications"]);
    }

    #[test]
    fn threshold_parsing_clamps_and_defaults() {
        assert_eq!(parse_threshold("90"), 90);
        assert_eq!(parse_threshold("250"), 100);
        assert_eq!(parse_threshold("abc"), 85);
        assert_eq!(parse_threshold(""), 85);
    }

    #[test]
    fn save_failure_prefers_server_reason() {
        assert_eq!(save_failure_text(&ApiError::server("Read only")), "Read only");
        assert_eq!(
            save_failure_text(&ApiError::request_failed("Request failed: refused")),
            SAVE_FAILED
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::test_support::mock::{MockServer, GET, PUT},
        test_support::ssr::render_to_string,
    };
    use serde_json::json;
    use std::time::Duration;

    fn view_model(server: &MockServer) -> EmployeeSettingsViewModel {
        EmployeeSettingsViewModel::new(Rc::new(ApiClient::new_with_base_url(server.base_url())))
    }

    #[tokio::test]
    async fn load_replaces_defaults() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/settings/employee");
            then.status(200).json_body(json!({
                "success": true,
                "settings": { "profile": { "displayName": "Jo", "email": "jo@x.io" } }
            }));
        });
        let vm = view_model(&server);
        vm.load().await;
        let settings = vm.settings.get_untracked();
        assert_eq!(settings.profile.display_name, "Jo");
        assert_eq!(settings.ai.accuracy_threshold, 85);
        assert!(!vm.loading.get_untracked());
        assert!(vm.message.get_untracked().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn load_failure_keeps_defaults_and_reports() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/settings/employee");
            then.network_error();
        });
        let vm = view_model(&server);
        vm.load().await;
        assert_eq!(vm.settings.get_untracked(), EmployeeSettings::default());
        assert_eq!(vm.message.get_untracked().error.as_deref(), Some(LOAD_FAILED));
        assert!(!vm.loading.get_untracked());
        runtime.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn save_shows_section_message_then_clears() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/settings/employee");
            then.status(200).json_body(json!({ "success": true }));
        });
        let vm = view_model(&server);
        vm.settings.update(|s| s.ai.response_tone = "formal".into());

        let during = async {
            tokio::time::sleep(Duration::from_millis(2900)).await;
            assert_eq!(
                vm.message.get_untracked().success.as_deref(),
                Some("AI settings saved successfully")
            );
            assert!(!vm.saving.get_untracked());
        };
        futures::join!(vm.save(Some(SettingsSection::Ai)), during);

        assert!(vm.message.get_untracked().is_empty());
        let body = server.last_body(PUT, "/settings/employee").unwrap_or_default();
        assert_eq!(body["ai"]["responseTone"], json!("formal"));
        assert_eq!(body["profile"]["displayName"], json!("Employee User"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn save_failure_shows_server_error() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/settings/employee");
            then.status(400).json_body(json!({ "success": false, "error": "Invalid email" }));
        });
        let vm = view_model(&server);
        vm.save(Some(SettingsSection::Profile)).await;
        assert_eq!(vm.message.get_untracked().error.as_deref(), Some("Invalid email"));
        assert!(!vm.saving.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn page_starts_with_spinner() {
        let html = render_to_string(|| view! { <EmployeeSettingsPage/> });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Save Changes"));
    }

    #[test]
    fn tabs_are_keyed_by_section() {
        let html = render_to_string(|| {
            let vm = EmployeeSettingsViewModel::new(Rc::new(ApiClient::new()));
            assert_eq!(vm.active_tab.get_untracked(), SettingsSection::Profile);
            vm.active_tab.set(SettingsSection::Notifications);
            let tabs = SettingsSection::ALL
                .iter()
                .map(|s| (*s, s.label()))
                .collect::<Vec<_>>();
            view! { <TabBar tabs=tabs active=vm.active_tab/> }
        });
        assert!(html.contains("AI Settings"));
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    }

    #[test]
    fn profile_tab_renders_fields() {
        let html = render_to_string(|| {
            let vm = EmployeeSettingsViewModel::new(Rc::new(ApiClient::new()));
            view! { <ProfileTab vm=vm/> }
        });
        assert!(html.contains("Full Name"));
        assert!(html.contains("Save Changes"));
    }
}

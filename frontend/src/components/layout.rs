use leptos::*;

use crate::components::{profile_menu::ProfileMenu, theme::ThemeToggle};

/// What a sidebar entry does when clicked.
#[derive(Clone)]
pub enum LinkAction {
    Navigate(String),
    Invoke(Callback<()>),
    Inert,
}

#[derive(Clone)]
pub struct SidebarLink {
    pub label: String,
    pub icon: &'static str,
    pub action: LinkAction,
}

impl SidebarLink {
    pub fn navigate(label: impl Into<String>, icon: &'static str, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon,
            action: LinkAction::Navigate(path.into()),
        }
    }

    pub fn invoke(label: impl Into<String>, icon: &'static str, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            icon,
            action: LinkAction::Invoke(on_click),
        }
    }

    pub fn inert(label: impl Into<String>, icon: &'static str) -> Self {
        Self {
            label: label.into(),
            icon,
            action: LinkAction::Inert,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match &self.action {
            LinkAction::Navigate(path) => Some(path),
            _ => None,
        }
    }
}

/// `current` equals `path` or lies underneath it.
pub fn is_link_active(path: &str, current: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    current == path
        || current
            .strip_prefix(path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

fn link_classes(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

#[component]
fn SidebarEntry(link: SidebarLink, current_path: Signal<String>) -> impl IntoView {
    let icon = format!("fas {} w-4", link.icon);
    let label = link.label.clone();
    match link.action {
        LinkAction::Navigate(path) => {
            let target = path.clone();
            let active = create_memo(move |_| current_path.with(|current| is_link_active(&path, current)));
            view! {
                <a
                    href=target
                    class=move || link_classes(active.get())
                    aria-current=move || active.get().then_some("page")
                >
                    <i class=icon></i>
                    <span>{label}</span>
                </a>
            }
            .into_view()
        }
        LinkAction::Invoke(on_click) => view! {
            <button
                type="button"
                class=link_classes(false)
                on:click=move |_| on_click.call(())
            >
                <i class=icon></i>
                <span>{label}</span>
            </button>
        }
        .into_view(),
        LinkAction::Inert => view! {
            <span class="flex items-center gap-3 px-3 py-2 text-sm text-fg-muted">
                <i class=icon></i>
                <span>{label}</span>
            </span>
        }
        .into_view(),
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] app_name: String,
    links: Vec<SidebarLink>,
    #[prop(optional)] footer_links: Vec<SidebarLink>,
    current_path: Signal<String>,
) -> impl IntoView {
    let has_footer = !footer_links.is_empty();
    view! {
        <aside class="w-64 shrink-0 border-r border-border bg-surface-elevated flex flex-col">
            <div class="h-16 flex items-center gap-2 px-4 border-b border-border">
                <i class="fas fa-shield-halved text-action-primary-bg"></i>
                <span class="font-semibold text-fg">{app_name}</span>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                {links
                    .into_iter()
                    .map(|link| view! { <SidebarEntry link=link current_path=current_path/> })
                    .collect_view()}
            </nav>
            <Show when=move || has_footer>
                <div class="px-3 py-4 border-t border-border space-y-1">
                    {footer_links
                        .clone()
                        .into_iter()
                        .map(|link| view! { <SidebarEntry link=link current_path=current_path/> })
                        .collect_view()}
                </div>
            </Show>
        </aside>
    }
}

#[component]
pub fn DashboardShell(
    #[prop(into)] app_name: String,
    links: Vec<SidebarLink>,
    #[prop(optional)] footer_links: Vec<SidebarLink>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(into)] user_name: Signal<String>,
    #[prop(into)] user_role: String,
    #[prop(into)] current_path: Signal<String>,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-surface text-fg">
            <Sidebar
                app_name=app_name
                links=links
                footer_links=footer_links
                current_path=current_path
            />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 flex items-center justify-between px-6 border-b border-border bg-surface-elevated">
                    <div>
                        <h1 class="text-lg font-semibold">{move || title.get()}</h1>
                        <p class="text-sm text-fg-muted">{move || subtitle.get()}</p>
                    </div>
                    <div class="flex items-center gap-4">
                        <ThemeToggle/>
                        <ProfileMenu user_name=user_name user_role=user_role on_logout=on_logout/>
                    </div>
                </header>
                <main class="flex-1 p-6 overflow-y-auto">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_on_exact_match() {
        assert!(is_link_active("/auditor/anomaly-detection", "/auditor/anomaly-detection"));
    }

    #[test]
    fn active_on_child_route() {
        assert!(is_link_active("/admin", "/admin/users"));
        assert!(is_link_active("/employee/settings", "/employee/settings/profile"));
    }

    #[test]
    fn inactive_on_shared_prefix_without_separator() {
        assert!(!is_link_active("/admin", "/administrator"));
        assert!(!is_link_active("/employee/reports", "/employee/reports-archive"));
        assert!(!is_link_active("/admin/users", "/admin"));
        assert!(!is_link_active("", "/admin"));
    }

    #[test]
    fn sidebar_link_exposes_path_only_for_navigation() {
        assert_eq!(
            SidebarLink::navigate("Reports", "fa-chart-bar", "/admin/reports").path(),
            Some("/admin/reports")
        );
        assert!(SidebarLink::inert("Trends", "fa-chart-line").path().is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_app, ssr::render_to_string};

    fn fixed(value: &'static str) -> Signal<String> {
        Signal::derive(move || value.to_string())
    }

    fn links() -> Vec<SidebarLink> {
        vec![
            SidebarLink::navigate("Overview", "fa-table-cells", "/admin"),
            SidebarLink::navigate("Reports", "fa-chart-bar", "/admin/reports"),
            SidebarLink::invoke("Logout", "fa-right-from-bracket", Callback::new(|_| {})),
            SidebarLink::inert("Help", "fa-circle-question"),
        ]
    }

    #[test]
    fn shell_renders_chrome_and_children() {
        let html = render_to_string(move || {
            provide_app(None);
            view! {
                <DashboardShell
                    app_name="AI Expense Transparency"
                    links=links()
                    title=fixed("Admin Dashboard")
                    subtitle=fixed("Manage expenses and organization")
                    user_name=fixed("Admin User")
                    user_role="Admin"
                    current_path=fixed("/admin/reports")
                    on_logout=Callback::new(|_| {})
                >
                    <p>"page body"</p>
                </DashboardShell>
            }
        });
        assert!(html.contains("AI Expense Transparency"));
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Manage expenses and organization"));
        assert!(html.contains("page body"));
        assert!(html.contains("Logout"));
        assert!(html.contains("Help"));
        assert!(html.contains("aria-current=\"page\""));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner/>
                    <ErrorMessage message="error"/>
                    <SuccessMessage message="ok"/>
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}

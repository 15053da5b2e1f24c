use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_location, use_navigate, Outlet};

use crate::{
    api::{ApiClient, Role},
    components::layout::DashboardShell,
    config,
    roles::RoleConfig,
    state::session::{use_session, SessionState},
    utils::task::spawn_scoped,
};

/// Top-bar identity and logout for one role dashboard.
#[derive(Clone)]
pub struct ShellViewModel {
    pub role: Role,
    /// Server-side profile name; only employees have one.
    pub profile_name: RwSignal<Option<String>>,
    session: SessionState,
    api: ApiClient,
}

impl ShellViewModel {
    pub fn new(role: Role, session: SessionState, api: ApiClient) -> Self {
        Self {
            role,
            profile_name: create_rw_signal(None),
            session,
            api,
        }
    }

    pub fn user_name(&self) -> String {
        self.profile_name
            .get()
            .unwrap_or_else(|| self.session.display_name(self.role))
    }

    pub async fn load_profile_name(&self) {
        if self.role != Role::Employee {
            return;
        }
        match self.api.get_employee_display_name().await {
            Ok(name) => self.profile_name.set(name),
            Err(err) => log::error!("employee profile not loaded: {}", err),
        }
    }

    pub fn sign_out(&self, navigate: impl Fn(&str)) {
        self.session.clear();
        log::info!("signed out of {} dashboard", self.role.as_str());
        navigate("/");
    }
}

/// Sidebar, top bar, and nested page outlet for one role.
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let role_config = RoleConfig::for_role(role);
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ShellViewModel::new(role, use_session(), api);
    let pathname = use_location().pathname;

    let heading = create_memo(move |_| pathname.with(|current| role_config.heading(current)));
    let title = Signal::derive(move || heading.get().0.to_string());
    let subtitle = Signal::derive(move || heading.get().1.to_string());

    if role == Role::Employee {
        let load_vm = vm.clone();
        create_effect(move |_| {
            let vm = load_vm.clone();
            spawn_scoped(async move { vm.load_profile_name().await });
        });
    }

    let name_vm = vm.clone();
    let user_name = Signal::derive(move || name_vm.user_name());

    let navigate = use_navigate();
    let on_logout = Callback::new(move |_| {
        vm.sign_out(|path| navigate(path, Default::default()));
    });

    view! {
        <Title text=move || title.get()/>
        <DashboardShell
            app_name=config::APP_NAME
            links=role_config.sidebar_links(on_logout)
            footer_links=role_config.footer_links()
            title=title
            subtitle=subtitle
            user_name=user_name
            user_role=role.label()
            current_path=Signal::derive(move || pathname.get())
            on_logout=on_logout
        >
            <Outlet/>
        </DashboardShell>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Admin/> }
}

#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Employee/> }
}

#[component]
pub fn AuditorDashboard() -> impl IntoView {
    view! { <RoleDashboard role=Role::Auditor/> }
}

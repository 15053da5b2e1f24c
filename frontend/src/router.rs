use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    config,
    pages::{
        anomalies::{AnomalyDetectionPage, AnomalyReviewPage},
        assistant::AssistantPage,
        audit_trail::AuditTrailPage,
        insights::{AdminInsightsPage, AuditorInsightsPage},
        landing::LandingPage,
        overview::{AdminOverviewPage, AuditorOverviewPage, EmployeeOverviewPage},
        reports::{AuditorReportsPage, ReportsPage},
        role_shell::{AdminDashboard, AuditorDashboard, EmployeeDashboard},
        settings::{EmployeeSettingsPage, GeneralSettingsPage},
        users::UserManagementPage,
    },
    roles::{self, RoleConfig},
    state::AppState,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/admin",
    "/admin/users",
    "/admin/reports",
    "/admin/ai-insights",
    "/admin/settings",
    "/admin/ai",
    "/employee",
    "/employee/anomaly-review",
    "/employee/reports",
    "/employee/settings",
    "/employee/ai",
    "/auditor",
    "/auditor/anomaly-detection",
    "/auditor/audit-trail",
    "/auditor/reports",
    "/auditor/ai-insights",
    "/auditor/settings",
    "/auditor/ai",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    AppState::from_browser().provide();
    provide_context(ApiClient::new());
    view! { <AppRoutes/> }
}

#[component]
fn AdminSettings() -> impl IntoView {
    view! { <GeneralSettingsPage role=Role::Admin/> }
}

#[component]
fn AuditorSettings() -> impl IntoView {
    view! { <GeneralSettingsPage role=Role::Auditor/> }
}

/// Router and route table; expects app state and the API client in context.
#[component]
pub fn AppRoutes() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title formatter=|page: String| {
            if page.is_empty() { config::APP_NAME.to_string() } else { format!("{} | {}", page, config::APP_NAME) }
        }/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/admin" view=AdminDashboard>
                    <Route path=roles::OVERVIEW view=AdminOverviewPage/>
                    <Route path=roles::USERS view=UserManagementPage/>
                    <Route path=roles::REPORTS view=ReportsPage/>
                    <Route path=roles::AI_INSIGHTS view=AdminInsightsPage/>
                    <Route path=roles::SETTINGS view=AdminSettings/>
                    <Route path=roles::ASSISTANT view=AssistantPage/>
                </Route>
                <Route path="/employee" view=EmployeeDashboard>
                    <Route path=roles::OVERVIEW view=EmployeeOverviewPage/>
                    <Route path=roles::ANOMALY_REVIEW view=AnomalyReviewPage/>
                    <Route path=roles::REPORTS view=ReportsPage/>
                    <Route path=roles::SETTINGS view=EmployeeSettingsPage/>
                    <Route path=roles::ASSISTANT view=AssistantPage/>
                </Route>
                <Route path="/auditor" view=AuditorDashboard>
                    <Route path=roles::OVERVIEW view=AuditorOverviewPage/>
                    <Route path=roles::ANOMALY_DETECTION view=AnomalyDetectionPage/>
                    <Route path=roles::AUDIT_TRAIL view=AuditTrailPage/>
                    <Route path=roles::REPORTS view=AuditorReportsPage/>
                    <Route path=roles::AI_INSIGHTS view=AuditorInsightsPage/>
                    <Route path=roles::SETTINGS view=AuditorSettings/>
                    <Route path=roles::ASSISTANT view=AssistantPage/>
                </Route>
                <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}

/// Every sidebar destination, as routed paths.
pub fn sidebar_paths() -> Vec<String> {
    Role::ALL
        .into_iter()
        .map(RoleConfig::for_role)
        .flat_map(|config| {
            config.pages.iter().map(move |page| config.page_path(page))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_sidebar_link_is_routed() {
        for path in sidebar_paths() {
            assert!(ROUTE_PATHS.contains(&path.as_str()), "unrouted link: {}", path);
        }
    }

    #[test]
    fn every_role_page_is_listed() {
        let linked: HashSet<String> = sidebar_paths().into_iter().collect();
        for path in ROUTE_PATHS.iter().filter(|p| **p != "/") {
            assert!(linked.contains(*path), "route missing from sidebar: {}", path);
        }
    }
}

use leptos::Callback;

use crate::{
    api::Role,
    components::layout::{is_link_active, SidebarLink},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePage {
    pub label: &'static str,
    pub icon: &'static str,
    /// Path below the role root; empty for the overview.
    pub segment: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Sidebar footer entry with no destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterItem {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct RoleConfig {
    pub role: Role,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub pages: &'static [RolePage],
    pub footer: &'static [FooterItem],
}

pub const OVERVIEW: &str = "";
pub const USERS: &str = "users";
pub const REPORTS: &str = "reports";
pub const AI_INSIGHTS: &str = "ai-insights";
pub const SETTINGS: &str = "settings";
pub const ASSISTANT: &str = "ai";
pub const ANOMALY_REVIEW: &str = "anomaly-review";
pub const ANOMALY_DETECTION: &str = "anomaly-detection";
pub const AUDIT_TRAIL: &str = "audit-trail";

const fn page(
    label: &'static str,
    icon: &'static str,
    segment: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> RolePage {
    RolePage {
        label,
        icon,
        segment,
        title,
        subtitle,
    }
}

const SETTINGS_PAGE: RolePage = page(
    "Settings",
    "fa-gear",
    SETTINGS,
    "Settings",
    "Profile, AI assistant, and app preferences",
);
const ASSISTANT_PAGE: RolePage = page(
    "AI Assistant",
    "fa-robot",
    ASSISTANT,
    "AI Assistant",
    "Ask about expenses, policies, and anomalies",
);

static ADMIN: RoleConfig = RoleConfig {
    role: Role::Admin,
    title: "Admin Dashboard",
    subtitle: "Manage expenses and organization",
    pages: &[
        page(
            "Dashboard Overview",
            "fa-table-cells-large",
            OVERVIEW,
            "Admin Dashboard",
            "Manage expenses and organization",
        ),
        page(
            "User Management",
            "fa-user-check",
            USERS,
            "User Management",
            "Manage users, roles, and permissions",
        ),
        page(
            "Reports",
            "fa-chart-column",
            REPORTS,
            "Reports & Analytics",
            "Spending trends and compliance overview",
        ),
        page(
            "AI Insights",
            "fa-lightbulb",
            AI_INSIGHTS,
            "AI Insights",
            "Observations generated from uploaded receipts",
        ),
        SETTINGS_PAGE,
        ASSISTANT_PAGE,
    ],
    footer: &[],
};

static EMPLOYEE: RoleConfig = RoleConfig {
    role: Role::Employee,
    title: "My Expense Dashboard",
    subtitle: "Track your expenses and reimbursements",
    pages: &[
        page(
            "Dashboard",
            "fa-house",
            OVERVIEW,
            "My Expense Dashboard",
            "Track your expenses and reimbursements",
        ),
        page(
            "Anomaly Review",
            "fa-triangle-exclamation",
            ANOMALY_REVIEW,
            "Anomaly Review",
            "Items the AI flagged on your expenses",
        ),
        page(
            "Expense Reports",
            "fa-file-invoice-dollar",
            REPORTS,
            "Expense Reports",
            "Spending by month and category",
        ),
        SETTINGS_PAGE,
        ASSISTANT_PAGE,
    ],
    footer: &[],
};

static AUDITOR: RoleConfig = RoleConfig {
    role: Role::Auditor,
    title: "Auditor Dashboard",
    subtitle: "Review and monitor expense activities",
    pages: &[
        page(
            "Dashboard",
            "fa-house",
            OVERVIEW,
            "Auditor Dashboard",
            "Review and monitor expense activities",
        ),
        page(
            "Anomaly Detection",
            "fa-magnifying-glass-chart",
            ANOMALY_DETECTION,
            "Anomaly Detection",
            "Flagged transactions and detection trends",
        ),
        page(
            "Audit Trail",
            "fa-clipboard-list",
            AUDIT_TRAIL,
            "Audit Trail",
            "Who did what, and when",
        ),
        page(
            "Reports",
            "fa-chart-column",
            REPORTS,
            "Reports",
            "Comprehensive analysis of spending patterns and anomalies",
        ),
        page(
            "AI Insights",
            "fa-lightbulb",
            AI_INSIGHTS,
            "AI Insights",
            "Compliance metrics and savings opportunities",
        ),
        SETTINGS_PAGE,
        ASSISTANT_PAGE,
    ],
    footer: &[FooterItem {
        label: "Trends",
        icon: "fa-chart-line",
    }],
};

impl RoleConfig {
    pub fn for_role(role: Role) -> &'static RoleConfig {
        match role {
            Role::Admin => &ADMIN,
            Role::Employee => &EMPLOYEE,
            Role::Auditor => &AUDITOR,
        }
    }

    pub fn page_path(&self, page: &RolePage) -> String {
        self.path_for(page.segment)
    }

    pub fn path_for(&self, segment: &str) -> String {
        if segment.is_empty() {
            self.role.home_path()
        } else {
            format!("{}/{}", self.role.home_path(), segment)
        }
    }

    /// Exact match first, then the deepest page containing `current`.
    pub fn active_page(&self, current: &str) -> Option<&'static RolePage> {
        let pages: &'static [RolePage] = self.pages;
        if let Some(exact) = pages.iter().find(|p| self.page_path(p) == current) {
            return Some(exact);
        }
        pages
            .iter()
            .filter(|p| is_link_active(&self.page_path(p), current))
            .max_by_key(|p| self.page_path(p).len())
    }

    pub fn heading(&self, current: &str) -> (&'static str, &'static str) {
        self.active_page(current)
            .map(|p| (p.title, p.subtitle))
            .unwrap_or((self.title, self.subtitle))
    }

    /// Page links followed by the logout action.
    pub fn sidebar_links(&self, on_logout: Callback<()>) -> Vec<SidebarLink> {
        self.pages
            .iter()
            .map(|p| SidebarLink::navigate(p.label, p.icon, self.page_path(p)))
            .chain(std::iter::once(SidebarLink::invoke(
                "Logout",
                "fa-right-from-bracket",
                on_logout,
            )))
            .collect()
    }

    pub fn footer_links(&self) -> Vec<SidebarLink> {
        self.footer
            .iter()
            .map(|item| SidebarLink::inert(item.label, item.icon))
            .collect()
    }
}

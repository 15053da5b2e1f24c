use crate::components::cards::BarDatum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseStatus {
    Approved,
    Pending,
    Flagged,
}

impl ExpenseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Approved => "Approved",
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Flagged => "Flagged",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ExpenseStatus::Approved => "badge green",
            ExpenseStatus::Pending => "badge yellow",
            ExpenseStatus::Flagged => "badge red",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: &'static str,
    pub date: &'static str,
    pub user: Option<&'static str>,
    pub vendor: &'static str,
    pub amount: f64,
    pub category: &'static str,
    pub status: ExpenseStatus,
}

const fn expense(
    id: &'static str,
    date: &'static str,
    user: Option<&'static str>,
    vendor: &'static str,
    amount: f64,
    category: &'static str,
    status: ExpenseStatus,
) -> ExpenseRow {
    ExpenseRow {
        id,
        date,
        user,
        vendor,
        amount,
        category,
        status,
    }
}

pub static EMPLOYEE_EXPENSES: &[ExpenseRow] = &[
    expense("1", "2025-11-01", None, "Coffee Shop", 45.0, "Food", ExpenseStatus::Approved),
    expense("2", "2025-10-30", None, "Uber", 28.0, "Travel", ExpenseStatus::Approved),
    expense("3", "2025-10-28", None, "Office Depot", 120.0, "Office", ExpenseStatus::Pending),
    expense("4", "2025-10-25", None, "Hotel XYZ", 450.0, "Travel", ExpenseStatus::Flagged),
    expense("5", "2025-10-22", None, "Restaurant", 85.0, "Food", ExpenseStatus::Approved),
];

pub static AUDIT_QUEUE: &[ExpenseRow] = &[
    expense(
        "1",
        "2025-11-01",
        Some("Sarah Johnson"),
        "Global Airlines",
        5900.0,
        "Travel",
        ExpenseStatus::Flagged,
    ),
    expense(
        "2",
        "2025-10-25",
        Some("Emily Davis"),
        "Restaurant Plaza",
        450.0,
        "Food",
        ExpenseStatus::Pending,
    ),
    expense(
        "3",
        "2025-10-20",
        Some("Emily Davis"),
        "ABC Tax Service",
        2500.0,
        "Office",
        ExpenseStatus::Flagged,
    ),
    expense(
        "4",
        "2025-10-15",
        Some("Mike Chan"),
        "Conference Center",
        3500.0,
        "Misc",
        ExpenseStatus::Pending,
    ),
];

pub fn employee_category_share() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Travel", 60.0),
        BarDatum::new("Office", 24.0),
        BarDatum::new("Food", 16.0),
    ]
}

pub fn employee_monthly_trend() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Jul", 500.0),
        BarDatum::new("Aug", 650.0),
        BarDatum::new("Sep", 550.0),
        BarDatum::new("Oct", 700.0),
    ]
}

pub fn compliance_split() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Compliant", 94.0),
        BarDatum::new("Non-Compliant", 6.0),
    ]
}

pub fn monthly_compliance() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Jul", 92.0),
        BarDatum::new("Aug", 94.0),
        BarDatum::new("Sep", 93.0),
        BarDatum::new("Oct", 94.0),
    ]
}

/// Organization-wide figures shown on the admin overview.
pub struct OrgMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
    pub icon: &'static str,
}

pub static ORG_METRICS: &[OrgMetric] = &[
    OrgMetric {
        label: "Total Expenses",
        value: "$124,580",
        hint: "Across all departments this quarter",
        icon: "fa-wallet",
    },
    OrgMetric {
        label: "Pending Approvals",
        value: "18",
        hint: "Awaiting admin action",
        icon: "fa-clock",
    },
    OrgMetric {
        label: "Flagged by AI",
        value: "6",
        hint: "This month",
        icon: "fa-triangle-exclamation",
    },
    OrgMetric {
        label: "Active Users",
        value: "42",
        hint: "Employees, admins, and auditors",
        icon: "fa-users",
    },
];

pub fn department_spend() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Sales", 38200.0),
        BarDatum::new("Engineering", 31400.0),
        BarDatum::new("Operations", 24900.0),
        BarDatum::new("Marketing", 18600.0),
        BarDatum::new("Finance", 11480.0),
    ]
}

pub fn quarterly_trend() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Aug", 39800.0),
        BarDatum::new("Sep", 41250.0),
        BarDatum::new("Oct", 43530.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total: f64,
    pub pending: usize,
    pub flagged: usize,
}

pub fn summarize(rows: &[ExpenseRow]) -> ExpenseSummary {
    rows.iter().fold(ExpenseSummary::default(), |mut acc, row| {
        acc.total += row.amount;
        match row.status {
            ExpenseStatus::Pending => acc.pending += 1,
            ExpenseStatus::Flagged => acc.flagged += 1,
            ExpenseStatus::Approved => {}
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_summary_counts_statuses() {
        let summary = summarize(EMPLOYEE_EXPENSES);
        assert_eq!(summary.total, 728.0);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.flagged, 1);
    }

    #[test]
    fn audit_queue_has_two_flags_and_two_pending() {
        let summary = summarize(AUDIT_QUEUE);
        assert_eq!(summary.flagged, 2);
        assert_eq!(summary.pending, 2);
        assert!(AUDIT_QUEUE.iter().all(|row| row.user.is_some()));
    }

    #[test]
    fn empty_rows_summarize_to_zero() {
        assert_eq!(summarize(&[]), ExpenseSummary::default());
    }
}

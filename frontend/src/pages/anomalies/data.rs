use crate::api::{AnomalyStats, FlaggedTransaction, MonthCount, ReasonShare, Severity};

#[allow(clippy::too_many_arguments)]
fn flagged(
    id: &str,
    date: &str,
    user: &str,
    vendor: &str,
    amount: f64,
    reason: &str,
    severity: Severity,
    confidence: f64,
) -> FlaggedTransaction {
    FlaggedTransaction {
        id: id.into(),
        date: date.into(),
        user: user.into(),
        vendor: vendor.into(),
        amount,
        reason: reason.into(),
        severity,
        confidence,
    }
}

fn month(month: &str, count: u32) -> MonthCount {
    MonthCount {
        month: month.into(),
        count,
    }
}

fn reason(name: &str, value: f64) -> ReasonShare {
    ReasonShare {
        name: name.into(),
        value,
    }
}

/// Organization-wide flags shown until the detection service answers.
pub fn default_flagged() -> Vec<FlaggedTransaction> {
    vec![
        flagged("1", "2025-11-03", "Mike Chen", "Global Airlines", 8900.0, "Duplicate Receipt", Severity::High, 87.0),
        flagged("2", "2025-11-02", "Sarah Johnson", "ABC Taxi Service", 2500.0, "Excessive Amount", Severity::Medium, 89.0),
        flagged("3", "2025-11-01", "Robert Brown", "Unknown Store XYZ", 780.0, "Unusual Vendor", Severity::Low, 76.0),
        flagged("4", "2025-10-31", "Lisa Anderson", "Cash Payment", 1200.0, "Missing Receipt", Severity::Medium, 100.0),
        flagged("5", "2025-10-28", "David Wilson", "Restaurant XYZ", 950.0, "Duplicate Receipt", Severity::Medium, 82.0),
        flagged("6", "2025-10-25", "Mike Chen", "Hotel Chain", 450.0, "Unusual Pattern", Severity::Low, 71.0),
    ]
}

pub fn default_stats() -> AnomalyStats {
    AnomalyStats {
        total_flagged: 6,
        pending_review: 4,
        approved_after_review: 12,
        ai_accuracy: 94.8,
        trend: vec![
            month("May", 9),
            month("Jun", 12),
            month("Jul", 8),
            month("Aug", 11),
            month("Sep", 7),
            month("Oct", 9),
        ],
        reasons: vec![
            reason("Duplicate", 25.0),
            reason("Excessive Amount", 20.0),
            reason("Missing Receipt", 30.0),
            reason("Unusual Vendor", 15.0),
            reason("Others", 10.0),
        ],
    }
}

/// AI explanation attached to a flagged transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub vendor: &'static str,
    pub amount: f64,
    pub severity: Severity,
    pub text: &'static str,
    pub confidence: f64,
}

pub fn detection_explanations() -> Vec<Explanation> {
    vec![
        Explanation {
            vendor: "Global Airlines",
            amount: 8900.0,
            severity: Severity::High,
            text: "Duplicate Receipt Detected: Two identical receipts for $8,900 were submitted on the same day by the same user. Receipt numbers match, suggesting potential double billing.",
            confidence: 97.0,
        },
        Explanation {
            vendor: "ABC Taxi Service",
            amount: 2500.0,
            severity: Severity::Medium,
            text: "Excessive Amount: This taxi amount is 3.4 standard deviations above the mean for this category ($715). The amount is unusually high, triggering our anomaly detection.",
            confidence: 89.0,
        },
        Explanation {
            vendor: "Unknown Store XYZ",
            amount: 780.0,
            severity: Severity::Low,
            text: "Unusual Vendor: This vendor has not appeared in our system before. No prior transaction history exists, which may indicate a new or potentially fraudulent vendor.",
            confidence: 76.0,
        },
    ]
}

/// The employee's own flags.
pub fn employee_flagged() -> Vec<FlaggedTransaction> {
    vec![
        flagged("e1", "2025-11-01", "Mike Chen", "Global Airlines", 4500.0, "Receipt total does not match the charged amount", Severity::High, 87.0),
        flagged("e2", "2025-11-02", "Sarah Johnson", "ABC Tax Service", 2500.0, "Charge is far above this vendor's average", Severity::Medium, 78.0),
        flagged("e3", "2025-10-30", "Robert Brown", "Unknown Store #42", 180.0, "Unusual Vendor", Severity::Low, 65.0),
        flagged("e4", "2025-10-28", "David Wilson", "Cash Payment", 1250.0, "Missing Receipt", Severity::Medium, 72.0),
        flagged("e5", "2025-10-25", "Mike Chen", "Hotel Chain", 450.0, "Duplicate transaction", Severity::Low, 68.0),
    ]
}

pub fn employee_stats() -> AnomalyStats {
    AnomalyStats {
        total_flagged: 6,
        pending_review: 4,
        approved_after_review: 12,
        ai_accuracy: 94.8,
        trend: vec![
            month("May", 8),
            month("Jun", 12),
            month("Jul", 7),
            month("Aug", 10),
            month("Sep", 9),
            month("Oct", 7),
        ],
        reasons: vec![
            reason("Excessive Amount", 35.0),
            reason("Missing Receipt", 25.0),
            reason("Unusual Vendor", 20.0),
            reason("Duplicate", 15.0),
            reason("Others", 5.0),
        ],
    }
}

pub fn employee_explanations() -> Vec<Explanation> {
    vec![
        Explanation {
            vendor: "Global Airlines",
            amount: 4500.0,
            severity: Severity::High,
            text: "Receipt text reads $4,500 where the booking was $450. Suggested pattern: double billing.",
            confidence: 97.0,
        },
        Explanation {
            vendor: "ABC Tax Service",
            amount: 2500.0,
            severity: Severity::Medium,
            text: "This charge sits 4 standard deviations above the vendor's mean, suggesting irregular pricing.",
            confidence: 84.0,
        },
        Explanation {
            vendor: "Unknown Store #42",
            amount: 740.0,
            severity: Severity::Low,
            text: "Unusual Vendor: no previous transaction history with this vendor. Not necessarily fraudulent, but it needs verification for compliance.",
            confidence: 78.0,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    All,
    Duplicates,
    Excessive,
    Missing,
    UnusualVendors,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::All,
        Scenario::Duplicates,
        Scenario::Excessive,
        Scenario::Missing,
        Scenario::UnusualVendors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::All => "All Scenarios",
            Scenario::Duplicates => "Duplicate Receipts",
            Scenario::Excessive => "Excessive Amounts",
            Scenario::Missing => "Missing Receipts",
            Scenario::UnusualVendors => "Unusual Vendors",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or(Scenario::All)
    }

    fn keyword(&self) -> Option<&'static str> {
        match self {
            Scenario::All => None,
            Scenario::Duplicates => Some("duplicate"),
            Scenario::Excessive => Some("excessive"),
            Scenario::Missing => Some("missing"),
            Scenario::UnusualVendors => Some("unusual vendor"),
        }
    }

    pub fn matches(&self, tx: &FlaggedTransaction) -> bool {
        self.keyword()
            .map(|k| tx.reason.to_lowercase().contains(k))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_filters_by_reason() {
        let rows = default_flagged();
        let count = |s: Scenario| rows.iter().filter(|tx| s.matches(tx)).count();
        assert_eq!(count(Scenario::All), 6);
        assert_eq!(count(Scenario::Duplicates), 2);
        assert_eq!(count(Scenario::Missing), 1);
        assert_eq!(count(Scenario::UnusualVendors), 1);
    }

    #[test]
    fn scenario_labels_round_trip_and_default() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_label(scenario.label()), scenario);
        }
        assert_eq!(Scenario::from_label("bogus"), Scenario::All);
    }

    #[test]
    fn default_stats_match_flag_list() {
        assert_eq!(default_stats().total_flagged as usize, default_flagged().len());
        let share: f64 = default_stats().reasons.iter().map(|r| r.value).sum();
        assert_eq!(share, 100.0);
    }
}

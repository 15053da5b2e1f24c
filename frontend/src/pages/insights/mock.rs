use crate::api::{AuditInsightData, CategoryAmount, Insight, InsightKind, Opportunity, TopMetrics};

fn insight(kind: InsightKind, title: &str, description: &str, details: &str) -> Insight {
    Insight {
        kind,
        title: title.into(),
        description: description.into(),
        details: Some(details.into()),
        status: None,
    }
}

fn category(name: &str, amount: f64) -> CategoryAmount {
    CategoryAmount {
        category: name.into(),
        amount,
    }
}

fn opportunity(title: &str, description: &str, category: &str, amount: f64) -> Opportunity {
    Opportunity {
        title: title.into(),
        description: description.into(),
        category: category.into(),
        amount,
    }
}

/// Demo data shown until the auditor asks for live insights.
pub fn demo_audit_insights() -> AuditInsightData {
    AuditInsightData {
        insights: vec![
            insight(
                InsightKind::Anomaly,
                "Trend Expense Increasing",
                "Travel expenses have increased by 25% this month compared to last month.",
                "Total travel spend: $8,500",
            ),
            insight(
                InsightKind::Warning,
                "Duplicate Records Found",
                "A duplicate receipt from Unique Vendor dated 03 Dec 2025 has been detected",
                "Amount: $1,500",
            ),
            insight(
                InsightKind::Recommendation,
                "Improved Documentation Rate",
                "Documentation completeness has improved to 92%, up 3% from last month. Maintaining records will help reduce compliance issues.",
                "Target: 95%",
            ),
            insight(
                InsightKind::Recommendation,
                "Office Supply Saving Opportunity",
                "Analysis suggests combining office supply orders to achieve volume discounts of approximately $500-700 monthly.",
                "Recommended: Use preferred vendor",
            ),
            insight(
                InsightKind::Anomaly,
                "Unusual Vendor Activity",
                "Vendor 'Tech Solutions Inc' has 5 transactions in 3 days, which is unusual based on historical patterns.",
                "Risk Level: Medium",
            ),
        ],
        spending_by_category: vec![
            category("Travel", 8500.0),
            category("IT", 6200.0),
            category("Office", 3400.0),
            category("Food", 2100.0),
            category("Misc", 1800.0),
        ],
        detected_opportunities: vec![
            opportunity(
                "Consolidate Office Supplies",
                "Combine orders to multiple suppliers into one preferred vendor",
                "Office Supplies",
                650.0,
            ),
            opportunity(
                "Negotiate Travel Rates",
                "Volume discount negotiation with airline and hotel partners",
                "Travel",
                1200.0,
            ),
            opportunity(
                "Optimize Software Subscriptions",
                "Review and consolidate duplicate software licenses",
                "IT",
                850.0,
            ),
            opportunity(
                "Vendor Consolidation",
                "Reduce vendor count and negotiate better rates",
                "Multiple",
                1500.0,
            ),
        ],
        top_metrics: TopMetrics {
            total_expenses: 22000.0,
            compliance_rate: 94.8,
            risk_score: 62.5,
        },
    }
}

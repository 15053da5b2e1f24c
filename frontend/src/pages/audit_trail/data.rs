use chrono::NaiveDateTime;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Approved,
    Uploaded,
    Flagged,
    Rejected,
    Generated,
    Edited,
    Returned,
}

impl ActionKind {
    pub fn badge_class(&self) -> &'static str {
        match self {
            ActionKind::Approved => "badge green",
            ActionKind::Uploaded | ActionKind::Generated => "badge blue",
            ActionKind::Flagged | ActionKind::Rejected => "badge red",
            ActionKind::Edited | ActionKind::Returned => "badge yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFilter {
    All,
    Approved,
    Uploaded,
    Flagged,
    Rejected,
    Generated,
}

impl ActionFilter {
    pub const ALL: [ActionFilter; 6] = [
        ActionFilter::All,
        ActionFilter::Approved,
        ActionFilter::Uploaded,
        ActionFilter::Flagged,
        ActionFilter::Rejected,
        ActionFilter::Generated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionFilter::All => "All Actions",
            ActionFilter::Approved => "Approved Expenses",
            ActionFilter::Uploaded => "Uploaded Receipts",
            ActionFilter::Flagged => "Flagged Items",
            ActionFilter::Rejected => "Rejected Items",
            ActionFilter::Generated => "Generated Reports",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == label)
            .unwrap_or(ActionFilter::All)
    }

    pub fn matches(&self, kind: ActionKind) -> bool {
        match self {
            ActionFilter::All => true,
            ActionFilter::Approved => kind == ActionKind::Approved,
            ActionFilter::Uploaded => kind == ActionKind::Uploaded,
            ActionFilter::Flagged => kind == ActionKind::Flagged,
            ActionFilter::Rejected => kind == ActionKind::Rejected,
            ActionFilter::Generated => kind == ActionKind::Generated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: u32,
    pub timestamp: &'static str,
    pub user: &'static str,
    pub action: &'static str,
    pub kind: ActionKind,
    pub details: &'static str,
    pub ip_address: &'static str,
}

impl ActivityEntry {
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    fn mentions(&self, needle: &str) -> bool {
        [self.user, self.action, self.details]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

const fn entry(
    id: u32,
    timestamp: &'static str,
    user: &'static str,
    action: &'static str,
    kind: ActionKind,
    details: &'static str,
    ip_address: &'static str,
) -> ActivityEntry {
    ActivityEntry {
        id,
        timestamp,
        user,
        action,
        kind,
        details,
        ip_address,
    }
}

pub static ACTIVITY_LOG: &[ActivityEntry] = &[
    entry(1, "2025-11-03 14:32", "John Smith", "Approved Expense", ActionKind::Approved, "Tech Solutions Inc - $2,450", "192.168.1.100"),
    entry(2, "2025-11-03 13:15", "Sarah Johnson", "Uploaded Receipt", ActionKind::Uploaded, "Office Depot - $340", "192.168.1.102"),
    entry(3, "2025-11-03 12:45", "John Smith", "Flagged as Duplicate", ActionKind::Flagged, "Global Airlines - $8,900", "192.168.1.100"),
    entry(4, "2025-11-03 11:20", "Emily Davis", "Generated Audit Report", ActionKind::Generated, "October 2025 Financial Report", "192.168.1.105"),
    entry(5, "2025-11-03 10:30", "Mike Chen", "Uploaded Receipt", ActionKind::Uploaded, "Restaurant Plaza - $450", "192.168.1.103"),
    entry(6, "2025-11-02 16:45", "John Smith", "Rejected Expense", ActionKind::Rejected, "ABC Taxi Service - $2,500", "192.168.1.100"),
    entry(7, "2025-11-02 15:30", "Robert Brown", "Uploaded Receipt", ActionKind::Uploaded, "Cloud Services Ltd - $1,200", "192.168.1.104"),
    entry(8, "2025-11-02 14:15", "John Smith", "Returned Expense", ActionKind::Returned, "Sent back to Mike Chen for a corrected receipt", "192.168.1.100"),
    entry(9, "2025-11-02 13:00", "Emily Davis", "Rejected Docs", ActionKind::Rejected, "Q3 Compliance Report CSV", "192.168.1.105"),
    entry(10, "2025-11-02 11:45", "Sarah Johnson", "Edited Expense", ActionKind::Edited, "Updated vendor name for $340 expense", "192.168.1.102"),
];

pub fn filter_log<'a>(
    log: &'a [ActivityEntry],
    query: &str,
    filter: ActionFilter,
) -> Vec<&'a ActivityEntry> {
    let needle = query.trim().to_lowercase();
    log.iter()
        .filter(|e| filter.matches(e.kind))
        .filter(|e| needle.is_empty() || e.mentions(&needle))
        .collect()
}

/// Newest first; entries with unreadable timestamps sort last.
pub fn timeline(log: &[ActivityEntry], limit: usize) -> Vec<&ActivityEntry> {
    let mut entries: Vec<&ActivityEntry> = log.iter().collect();
    entries.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
    entries.truncate(limit);
    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailSummary {
    pub total: usize,
    pub approvals: usize,
    pub flags_and_rejections: usize,
    pub reports: usize,
}

pub fn summarize(log: &[ActivityEntry]) -> TrailSummary {
    log.iter().fold(TrailSummary::default(), |mut acc, e| {
        acc.total += 1;
        match e.kind {
            ActionKind::Approved => acc.approvals += 1,
            ActionKind::Flagged | ActionKind::Rejected => acc.flags_and_rejections += 1,
            ActionKind::Generated => acc.reports += 1,
            _ => {}
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_action_and_search() {
        assert_eq!(filter_log(ACTIVITY_LOG, "", ActionFilter::All).len(), 10);
        assert_eq!(filter_log(ACTIVITY_LOG, "", ActionFilter::Uploaded).len(), 3);
        let hits = filter_log(ACTIVITY_LOG, "john", ActionFilter::Rejected);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 6);
        assert_eq!(filter_log(ACTIVITY_LOG, "AIRLINES", ActionFilter::All)[0].id, 3);
    }

    #[test]
    fn timeline_is_newest_first() {
        let mut log = ACTIVITY_LOG.to_vec();
        log.reverse();
        let recent = timeline(&log, 5);
        assert_eq!(recent.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unreadable_timestamps_sort_last() {
        let mut log = ACTIVITY_LOG[..2].to_vec();
        log[0].timestamp = "yesterday";
        let recent = timeline(&log, 5);
        assert_eq!(recent[0].id, 2);
        assert_eq!(recent[1].id, 1);
    }

    #[test]
    fn summary_counts_kinds() {
        let summary = summarize(ACTIVITY_LOG);
        assert_eq!(
            summary,
            TrailSummary {
                total: 10,
                approvals: 1,
                flags_and_rejections: 3,
                reports: 1,
            }
        );
    }

    #[test]
    fn filter_labels_parse_back() {
        for filter in ActionFilter::ALL {
            assert_eq!(ActionFilter::from_label(filter.label()), filter);
        }
    }
}

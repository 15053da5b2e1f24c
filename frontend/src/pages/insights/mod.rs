pub mod admin;
pub mod auditor;
pub mod mock;

pub use admin::AdminInsightsPage;
pub use auditor::AuditorInsightsPage;

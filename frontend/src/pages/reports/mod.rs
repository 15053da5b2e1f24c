pub mod auditor;
pub mod panel;
pub mod utils;
pub mod view_model;

pub use auditor::AuditorReportsPage;
pub use panel::ReportsPage;

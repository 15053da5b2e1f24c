pub mod anomalies;
pub mod assistant;
pub mod audit_trail;
pub mod insights;
pub mod landing;
pub mod overview;
pub mod reports;
pub mod role_shell;
pub mod settings;
pub mod users;

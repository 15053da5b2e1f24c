pub mod employee;
pub mod general;

pub use employee::EmployeeSettingsPage;
pub use general::GeneralSettingsPage;

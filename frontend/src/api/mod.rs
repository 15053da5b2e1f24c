mod anomalies;
pub mod auth;
pub mod client;
pub mod insights;
mod reports;
mod settings;
pub mod types;
mod users;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

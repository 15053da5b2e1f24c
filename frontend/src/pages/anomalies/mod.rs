pub mod components;
pub mod data;
pub mod detection;
pub mod review;

pub use detection::AnomalyDetectionPage;
pub use review::AnomalyReviewPage;

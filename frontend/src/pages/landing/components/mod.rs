pub mod features;
pub mod form;

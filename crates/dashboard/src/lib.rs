pub mod cache;
pub mod features;
pub mod formatters;
pub mod labels;

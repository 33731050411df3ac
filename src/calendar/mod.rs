pub mod aggregate;
pub mod stats;

pub use aggregate::{group_weeks, join_days};
pub use stats::summarize;

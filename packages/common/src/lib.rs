pub mod analytics;
pub mod assignment_status;
pub mod metrics;
pub mod records;
pub mod store;

pub use assignment_status::AssignmentStatus;
pub use metrics::{FixedMetrics, MetricSource, RandomMetrics};

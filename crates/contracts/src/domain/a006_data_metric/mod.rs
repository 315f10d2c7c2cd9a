pub mod aggregate;

pub use aggregate::{DataMetric, DataMetricDto, DataMetricId};

//! # securecheck-analysis
//!
//! Analysis engine for SecureCheck: the outcome estimator, the log-entry
//! narrative formatter, and the registry of predefined insight queries.

pub mod estimator;
pub mod insights;

pub use estimator::narrative::describe;
pub use estimator::{estimate, DEFAULT_OUTCOME, DEFAULT_VIOLATION};
pub use insights::{ChartSpec, InsightCategory, InsightDescriptor, InsightRegistry};

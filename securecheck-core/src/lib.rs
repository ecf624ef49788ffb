//! # securecheck-core
//!
//! Foundation crate for the SecureCheck analytics engine.
//! Defines the shared types, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export the most commonly used items at the crate root.
pub use config::{AppConfig, DatabaseConfig};
pub use errors::{SecureCheckError, SecureCheckResult};
pub use traits::StopStore;
pub use types::query::{EstimationResult, StopQuery};
pub use types::stop::{Gender, StopRecord};
pub use types::summary::SummaryMetrics;
pub use types::table::{CellValue, TableResult};

/// `FxHashMap` re-export so downstream crates share one hasher choice.
pub use rustc_hash::FxHashMap;

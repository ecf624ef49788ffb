//! Tracing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

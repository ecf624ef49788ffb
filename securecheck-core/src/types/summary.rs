//! Dashboard headline counters.

use serde::{Deserialize, Serialize};

/// The four metrics shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_stops: u64,
    pub searches_conducted: u64,
    /// Stops whose outcome mentions an arrest.
    pub arrests: u64,
    /// Stops whose outcome mentions a ticket.
    pub tickets_issued: u64,
}

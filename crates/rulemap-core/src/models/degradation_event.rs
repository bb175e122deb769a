use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records a fallback to a lower-priority embedding provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

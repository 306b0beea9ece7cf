use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Runtime settings that an administrator can change while the service runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// When set, identifiers are `prefix + sequence number` instead of random
    /// UUIDs.
    pub debug: bool,
}

/// A point-in-time copy of the service counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(rename = "starttime")]
    pub start_time: DateTime<Utc>,
    pub num_requests: u64,
    #[serde(rename = "num_uuids")]
    pub num_identifiers_issued: u64,
    /// Next sequence number handed out in debug mode.
    #[serde(rename = "debug_count")]
    pub debug_sequence_cursor: u64,
}

impl AdminStats {
    pub(crate) fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            num_requests: 0,
            num_identifiers_issued: 0,
            debug_sequence_cursor: 0,
        }
    }
}

use serde::{Deserialize, Serialize};

/// A point-in-time copy of the live counters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Stats {
    pub started: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_scrapes_handled: i64,
    pub tcp4_failure: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_scrapes_handled: i64,
    pub tcp6_failure: i64,
}

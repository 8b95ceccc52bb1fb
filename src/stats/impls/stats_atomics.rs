use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            tcp4_connections_handled: AtomicI64::new(0),
            tcp4_announces_handled: AtomicI64::new(0),
            tcp4_scrapes_handled: AtomicI64::new(0),
            tcp4_failure: AtomicI64::new(0),
            tcp6_connections_handled: AtomicI64::new(0),
            tcp6_announces_handled: AtomicI64::new(0),
            tcp6_scrapes_handled: AtomicI64::new(0),
            tcp6_failure: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

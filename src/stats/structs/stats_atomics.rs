use std::sync::atomic::AtomicI64;

/// Live counters, updated from the request handlers.
#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub tcp4_connections_handled: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp4_scrapes_handled: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp6_connections_handled: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub tcp6_scrapes_handled: AtomicI64,
    pub tcp6_failure: AtomicI64,
}

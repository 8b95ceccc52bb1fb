//! Request statistics.
//!
//! Atomic counters for the traffic this tracker serves: announces,
//! scrapes and failures per address family. Updated from the HTTP
//! handlers without locking; snapshots are cheap and serializable.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

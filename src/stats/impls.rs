/// Construction of the atomic counter block.
pub mod stats_atomics;

/// Statistics methods on the tracker facade.
pub mod torrent_tracker;

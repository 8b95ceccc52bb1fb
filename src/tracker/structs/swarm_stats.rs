use serde::{Deserialize, Serialize};

/// Aggregate counters for one swarm: seeders, leechers and the number of
/// completed downloads the tracker has counted.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SwarmStats {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}

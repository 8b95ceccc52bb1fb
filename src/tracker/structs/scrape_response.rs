use std::collections::BTreeMap;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_stats::SwarmStats;

/// A scrape response body before bencoding: per-torrent swarm counters,
/// keyed by info hash. Torrents without any registered peer still get an
/// entry with zeroed counters.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ScrapeResponse {
    pub files: BTreeMap<InfoHash, SwarmStats>,
}

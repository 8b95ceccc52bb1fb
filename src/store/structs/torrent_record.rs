use std::collections::BTreeMap;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// A torrent as the in-memory adapter stores it: the monotonically
/// increasing download counter plus the swarm keyed by peer id, which
/// also enforces the one-record-per-peer invariant.
#[derive(Clone, Debug, Default)]
pub struct TorrentRecord {
    pub completed: u64,
    pub peers: BTreeMap<PeerId, TorrentPeer>,
}

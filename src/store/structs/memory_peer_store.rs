use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::tracker::structs::info_hash::InfoHash;

/// Lock-guarded in-memory [`PeerStore`](crate::store::traits::peer_store::PeerStore) adapter.
///
/// The ordered map keeps `list_torrents` paging stable without extra
/// bookkeeping. One write lock per mutation gives the per-operation
/// atomicity the contract requires.
#[derive(Default)]
pub struct MemoryPeerStore {
    pub(crate) torrents: RwLock<BTreeMap<InfoHash, TorrentRecord>>,
}

use std::collections::BTreeMap;
use log::debug;
use crate::common::structs::number_of_bytes::NumberOfBytes;
use crate::store::structs::memory_peer_store::MemoryPeerStore;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl MemoryPeerStore {
    pub fn new() -> MemoryPeerStore {
        MemoryPeerStore { torrents: parking_lot::RwLock::new(BTreeMap::new()) }
    }
}

impl PeerStore for MemoryPeerStore {
    fn torrent_exists(&self, info_hash: &InfoHash) -> bool {
        self.torrents.read().contains_key(info_hash)
    }

    fn register_torrent(&self, info_hash: &InfoHash) -> bool {
        let mut torrents_lock = self.torrents.write();
        if torrents_lock.contains_key(info_hash) {
            return false;
        }
        torrents_lock.insert(*info_hash, TorrentRecord::default());
        debug!("[STORE] registered torrent {}", info_hash);
        true
    }

    fn delete_torrent(&self, info_hash: &InfoHash) -> bool {
        self.torrents.write().remove(info_hash).is_some()
    }

    fn peer_exists(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool {
        match self.torrents.read().get(info_hash) {
            None => false,
            Some(record) => record.peers.contains_key(peer_id),
        }
    }

    fn register_peer(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool {
        let mut torrents_lock = self.torrents.write();
        let Some(record) = torrents_lock.get_mut(info_hash) else {
            return false;
        };
        if record.peers.contains_key(&peer.peer_id) {
            return false;
        }
        record.peers.insert(peer.peer_id, peer.clone());
        true
    }

    fn update_peer(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool {
        let mut torrents_lock = self.torrents.write();
        let Some(record) = torrents_lock.get_mut(info_hash) else {
            return false;
        };
        match record.peers.get_mut(&peer.peer_id) {
            None => false,
            Some(existing) => {
                *existing = peer.clone();
                true
            }
        }
    }

    fn delete_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool {
        let mut torrents_lock = self.torrents.write();
        match torrents_lock.get_mut(info_hash) {
            None => false,
            Some(record) => record.peers.remove(peer_id).is_some(),
        }
    }

    fn mark_peer_complete(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool {
        let mut torrents_lock = self.torrents.write();
        let Some(record) = torrents_lock.get_mut(info_hash) else {
            return false;
        };
        let Some(existing) = record.peers.get_mut(&peer.peer_id) else {
            return false;
        };
        if existing.left == NumberOfBytes(0) {
            // already a seeder, nothing to transition and nothing to count
            return false;
        }

        let mut updated = peer.clone();
        updated.left = NumberOfBytes(0);
        *existing = updated;
        record.completed += 1;
        true
    }

    fn list_peers(&self, info_hash: &InfoHash, limit: Option<usize>, exclude: Option<&PeerId>) -> Vec<TorrentPeer> {
        let torrents_lock = self.torrents.read();
        let Some(record) = torrents_lock.get(info_hash) else {
            return Vec::new();
        };
        record.peers.values()
            .filter(|peer| exclude != Some(&peer.peer_id))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    fn list_torrents(&self, page: usize, page_size: usize) -> Vec<InfoHash> {
        if page == 0 {
            return Vec::new();
        }
        self.torrents.read().keys()
            .skip((page - 1) * page_size)
            .take(page_size)
            .copied()
            .collect()
    }

    fn count_torrents(&self) -> usize {
        self.torrents.read().len()
    }

    fn count_downloads(&self, info_hash: &InfoHash) -> Option<u64> {
        self.torrents.read().get(info_hash).map(|record| record.completed)
    }
}

#[cfg(test)]
mod store_tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use crate::common::structs::number_of_bytes::NumberOfBytes;
    use crate::store::structs::memory_peer_store::MemoryPeerStore;
    use crate::store::traits::peer_store::PeerStore;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent_peer::TorrentPeer;

    fn info_hash(byte: u8) -> InfoHash {
        InfoHash([byte; 20])
    }

    fn peer(id_byte: u8, left: i64) -> TorrentPeer {
        TorrentPeer {
            peer_id: PeerId([id_byte; 20]),
            peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, id_byte)), 6881),
            updated: std::time::Instant::now(),
            uploaded: NumberOfBytes(0),
            downloaded: NumberOfBytes(0),
            left: NumberOfBytes(left),
            event: AnnounceEvent::Started,
        }
    }

    #[test]
    fn test_register_torrent_twice_returns_false_and_counts_once() {
        let store = MemoryPeerStore::new();

        assert!(store.register_torrent(&info_hash(1)));
        assert!(!store.register_torrent(&info_hash(1)));
        assert_eq!(store.count_torrents(), 1);
    }

    #[test]
    fn test_register_peer_on_missing_torrent_never_creates_it() {
        let store = MemoryPeerStore::new();

        assert!(!store.register_peer(&info_hash(1), &peer(1, 0)));
        assert!(!store.torrent_exists(&info_hash(1)));
        assert_eq!(store.count_torrents(), 0);
    }

    #[test]
    fn test_register_peer_twice_returns_false() {
        let store = MemoryPeerStore::new();
        store.register_torrent(&info_hash(1));

        assert!(store.register_peer(&info_hash(1), &peer(1, 500)));
        assert!(!store.register_peer(&info_hash(1), &peer(1, 0)));

        // the original record wins
        let peers = store.list_peers(&info_hash(1), None, None);
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].left, NumberOfBytes(500));
    }

    #[test]
    fn test_update_peer_requires_existing_records() {
        let store = MemoryPeerStore::new();

        assert!(!store.update_peer(&info_hash(1), &peer(1, 0)));

        store.register_torrent(&info_hash(1));
        assert!(!store.update_peer(&info_hash(1), &peer(1, 0)));

        store.register_peer(&info_hash(1), &peer(1, 500));
        assert!(store.update_peer(&info_hash(1), &peer(1, 100)));
        assert_eq!(store.list_peers(&info_hash(1), None, None)[0].left, NumberOfBytes(100));
    }

    #[test]
    fn test_delete_peer_and_torrent() {
        let store = MemoryPeerStore::new();
        store.register_torrent(&info_hash(1));
        store.register_peer(&info_hash(1), &peer(1, 0));

        assert!(!store.delete_peer(&info_hash(1), &PeerId([9; 20])));
        assert!(store.delete_peer(&info_hash(1), &PeerId([1; 20])));
        assert!(!store.delete_peer(&info_hash(1), &PeerId([1; 20])));

        assert!(store.delete_torrent(&info_hash(1)));
        assert!(!store.delete_torrent(&info_hash(1)));
        assert!(!store.delete_peer(&info_hash(1), &PeerId([1; 20])));
    }

    #[test]
    fn test_mark_peer_complete_increments_downloads_exactly_once() {
        let store = MemoryPeerStore::new();
        store.register_torrent(&info_hash(1));
        store.register_peer(&info_hash(1), &peer(1, 1000));

        assert_eq!(store.count_downloads(&info_hash(1)), Some(0));
        assert!(store.mark_peer_complete(&info_hash(1), &peer(1, 0)));
        assert_eq!(store.count_downloads(&info_hash(1)), Some(1));
        assert_eq!(store.list_peers(&info_hash(1), None, None)[0].left, NumberOfBytes(0));

        // a second completion has no transition to apply and must not count
        assert!(!store.mark_peer_complete(&info_hash(1), &peer(1, 0)));
        assert_eq!(store.count_downloads(&info_hash(1)), Some(1));
    }

    #[test]
    fn test_mark_peer_complete_requires_the_peer() {
        let store = MemoryPeerStore::new();

        assert!(!store.mark_peer_complete(&info_hash(1), &peer(1, 0)));

        store.register_torrent(&info_hash(1));
        assert!(!store.mark_peer_complete(&info_hash(1), &peer(1, 0)));
        assert_eq!(store.count_downloads(&info_hash(1)), Some(0));
    }

    #[test]
    fn test_list_peers_respects_limit_and_exclusion() {
        let store = MemoryPeerStore::new();
        store.register_torrent(&info_hash(1));
        for id in 1..=8u8 {
            store.register_peer(&info_hash(1), &peer(id, 100));
        }

        let excluded = PeerId([3; 20]);
        let peers = store.list_peers(&info_hash(1), Some(5), Some(&excluded));

        assert_eq!(peers.len(), 5);
        assert!(peers.iter().all(|p| p.peer_id != excluded));

        let all = store.list_peers(&info_hash(1), None, Some(&excluded));
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_list_peers_on_unknown_torrent_is_empty() {
        let store = MemoryPeerStore::new();
        assert!(store.list_peers(&info_hash(1), Some(10), None).is_empty());
    }

    #[test]
    fn test_list_torrents_paging_reproduces_the_full_set() {
        let store = MemoryPeerStore::new();
        for byte in 1..=7u8 {
            store.register_torrent(&info_hash(byte));
        }

        assert!(store.list_torrents(0, 3).is_empty());

        let mut collected = Vec::new();
        let mut page = 1;
        while collected.len() < store.count_torrents() {
            let chunk = store.list_torrents(page, 3);
            assert!(!chunk.is_empty());
            collected.extend(chunk);
            page += 1;
        }

        assert_eq!(collected.len(), 7);
        collected.sort();
        collected.dedup();
        assert_eq!(collected.len(), 7);
        assert!(store.list_torrents(page, 3).is_empty());
    }

    #[test]
    fn test_count_downloads_distinguishes_missing_from_zero() {
        let store = MemoryPeerStore::new();

        assert_eq!(store.count_downloads(&info_hash(1)), None);
        store.register_torrent(&info_hash(1));
        assert_eq!(store.count_downloads(&info_hash(1)), Some(0));
    }
}

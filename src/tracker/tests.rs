#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
    use std::sync::Arc;
    use byteorder::{BigEndian, ReadBytesExt};
    use crate::common::common::parse_query;
    use crate::common::enums::tracker_error::TrackerError;
    use crate::common::structs::number_of_bytes::NumberOfBytes;
    use crate::config::structs::configuration::Configuration;
    use crate::store::traits::peer_store::PeerStore;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_response::{AnnouncePeerList, AnnounceResponse};
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent_peer::TorrentPeer;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

    fn tracker(auto_register: bool) -> TorrentTracker {
        let mut config = Configuration::init();
        config.tracker_config.auto_register = auto_register;
        TorrentTracker::new(Arc::new(config))
    }

    fn query_map(query: &str) -> HashMap<String, Vec<Vec<u8>>> {
        parse_query(Some(query.to_string())).unwrap()
    }

    /// A full announce query for the torrent "aaaaaaaaaaaaaaaaaaaa".
    fn announce_query(peer_id: &str, event: &str, left: u64) -> String {
        let mut query = format!(
            "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id={}&port=6881&uploaded=0&downloaded=0&left={}",
            peer_id, left
        );
        if !event.is_empty() {
            query.push_str(&format!("&event={}", event));
        }
        query
    }

    fn torrent() -> InfoHash {
        InfoHash(*b"aaaaaaaaaaaaaaaaaaaa")
    }

    fn peer(id_byte: u8, ip: IpAddr, port: u16, left: i64) -> TorrentPeer {
        TorrentPeer {
            peer_id: PeerId([id_byte; 20]),
            peer_addr: SocketAddr::new(ip, port),
            updated: std::time::Instant::now(),
            uploaded: NumberOfBytes(0),
            downloaded: NumberOfBytes(0),
            left: NumberOfBytes(left),
            event: AnnounceEvent::Started,
        }
    }

    #[test]
    fn test_announce_rejects_missing_required_field() {
        let tracker = tracker(true);
        let query = "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id=bbbbbbbbbbbbbbbbbbbb&port=6881&uploaded=0&downloaded=0";

        let result = tracker.handle_announce(LOCALHOST, query_map(query));

        assert_eq!(result, Err(TrackerError::Validation("missing query parameter: left".to_string())));
    }

    #[test]
    fn test_announce_rejects_unknown_event() {
        let tracker = tracker(true);
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "paused", 100);

        let result = tracker.handle_announce(LOCALHOST, query_map(&query));

        assert_eq!(result, Err(TrackerError::Validation("invalid event: paused".to_string())));
    }

    #[test]
    fn test_announce_rejects_port_zero() {
        let tracker = tracker(true);
        let query = "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id=bbbbbbbbbbbbbbbbbbbb&port=0&uploaded=0&downloaded=0&left=0";

        let result = tracker.handle_announce(LOCALHOST, query_map(query));

        assert_eq!(result, Err(TrackerError::Validation("invalid port: 0".to_string())));
    }

    #[test]
    fn test_announce_rejects_short_info_hash() {
        let tracker = tracker(true);
        let query = "info_hash=tooshort&peer_id=bbbbbbbbbbbbbbbbbbbb&port=6881&uploaded=0&downloaded=0&left=0";

        let result = tracker.handle_announce(LOCALHOST, query_map(query));

        assert_eq!(result, Err(TrackerError::Validation("invalid info_hash: expected 20 bytes".to_string())));
    }

    #[test]
    fn test_announce_validates_every_supplied_info_hash() {
        let tracker = tracker(true);
        let query = "info_hash=aaaaaaaaaaaaaaaaaaaa&info_hash=short&peer_id=bbbbbbbbbbbbbbbbbbbb&port=6881&uploaded=0&downloaded=0&left=0&event=started";

        let result = tracker.handle_announce(LOCALHOST, query_map(query));

        assert_eq!(result, Err(TrackerError::Validation("invalid info_hash: expected 20 bytes".to_string())));
    }

    #[test]
    fn test_announce_rejects_short_peer_id() {
        let tracker = tracker(true);
        let query = "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id=short&port=6881&uploaded=0&downloaded=0&left=0";

        let result = tracker.handle_announce(LOCALHOST, query_map(query));

        assert_eq!(result, Err(TrackerError::Validation("invalid peer_id: expected 20 bytes".to_string())));
    }

    #[test]
    fn test_announce_unknown_torrent_without_auto_register_fails() {
        let tracker = tracker(false);
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);

        let result = tracker.handle_announce(LOCALHOST, query_map(&query));

        assert_eq!(result, Err(TrackerError::ProtocolState("torrent not found")));
        assert!(!tracker.store.torrent_exists(&torrent()));
    }

    #[test]
    fn test_announce_started_auto_registers_torrent_and_peer() {
        let tracker = tracker(true);
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);

        tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();

        assert!(tracker.store.torrent_exists(&torrent()));
        assert!(tracker.store.peer_exists(&torrent(), &PeerId(*b"bbbbbbbbbbbbbbbbbbbb")));
    }

    #[test]
    fn test_announce_started_is_idempotent() {
        let tracker = tracker(true);
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);

        tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();
        tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();

        assert_eq!(tracker.store.list_peers(&torrent(), None, None).len(), 1);
    }

    #[test]
    fn test_announce_keep_alive_for_unknown_peer_is_rejected() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "", 100);

        let result = tracker.handle_announce(LOCALHOST, query_map(&query));

        assert_eq!(result, Err(TrackerError::ProtocolState("unexpected peer state")));
    }

    #[test]
    fn test_announce_keep_alive_updates_known_peer() {
        let tracker = tracker(true);
        let started = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);
        tracker.handle_announce(LOCALHOST, query_map(&started)).unwrap();

        let update = announce_query("bbbbbbbbbbbbbbbbbbbb", "", 42);
        tracker.handle_announce(LOCALHOST, query_map(&update)).unwrap();

        let peers = tracker.store.list_peers(&torrent(), None, None);
        assert_eq!(peers[0].left, NumberOfBytes(42));
    }

    #[test]
    fn test_announce_stopped_deletes_the_peer() {
        let tracker = tracker(true);
        let started = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);
        tracker.handle_announce(LOCALHOST, query_map(&started)).unwrap();

        let stopped = announce_query("bbbbbbbbbbbbbbbbbbbb", "stopped", 100);
        tracker.handle_announce(LOCALHOST, query_map(&stopped)).unwrap();

        assert!(!tracker.store.peer_exists(&torrent(), &PeerId(*b"bbbbbbbbbbbbbbbbbbbb")));
    }

    #[test]
    fn test_announce_stopped_for_unknown_peer_is_rejected() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        let stopped = announce_query("bbbbbbbbbbbbbbbbbbbb", "stopped", 100);

        let result = tracker.handle_announce(LOCALHOST, query_map(&stopped));

        assert_eq!(result, Err(TrackerError::ProtocolState("unexpected peer state")));
    }

    #[test]
    fn test_announce_completed_counts_exactly_once() {
        let tracker = tracker(true);
        let started = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 500);
        tracker.handle_announce(LOCALHOST, query_map(&started)).unwrap();

        let completed = announce_query("bbbbbbbbbbbbbbbbbbbb", "completed", 0);
        tracker.handle_announce(LOCALHOST, query_map(&completed)).unwrap();

        assert_eq!(tracker.store.count_downloads(&torrent()), Some(1));
        assert_eq!(tracker.store.list_peers(&torrent(), None, None)[0].left, NumberOfBytes(0));

        // repeating the completion without a fresh "started" must not
        // move the counter again
        let result = tracker.handle_announce(LOCALHOST, query_map(&completed));
        assert_eq!(result, Err(TrackerError::ProtocolState("peer already completed")));
        assert_eq!(tracker.store.count_downloads(&torrent()), Some(1));
    }

    #[test]
    fn test_announce_completed_for_unknown_peer_is_rejected() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        let completed = announce_query("bbbbbbbbbbbbbbbbbbbb", "completed", 0);

        let result = tracker.handle_announce(LOCALHOST, query_map(&completed));

        assert_eq!(result, Err(TrackerError::ProtocolState("unexpected peer state")));
        assert_eq!(tracker.store.count_downloads(&torrent()), Some(0));
    }

    #[test]
    fn test_announce_response_for_empty_swarm_is_canonical() {
        let tracker = tracker(true);
        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);

        let body = tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();

        // the requester itself is excluded, so the peer list is empty
        assert_eq!(body, b"d8:completei0e10:incompletei0e8:intervali1800e5:peerslee".to_vec());
    }

    #[test]
    fn test_announce_response_excludes_the_requester_and_counts_the_rest() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        tracker.store.register_peer(&torrent(), &peer(1, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 6001, 0));
        tracker.store.register_peer(&torrent(), &peer(2, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 6002, 500));

        let query = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);
        let body = tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("8:completei1e"));
        assert!(text.contains("10:incompletei1e"));
        assert!(text.contains("2:ip8:10.0.0.1"));
        assert!(text.contains("2:ip8:10.0.0.2"));
        assert!(!text.contains("127.0.0.1"));
    }

    #[test]
    fn test_announce_response_omits_peer_ids_on_request() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        tracker.store.register_peer(&torrent(), &peer(1, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 6001, 0));

        let with_ids = announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100);
        let body = tracker.handle_announce(LOCALHOST, query_map(&with_ids)).unwrap();
        assert!(String::from_utf8_lossy(&body).contains("7:peer id"));

        let without_ids = format!("{}&no_peer_id=1", announce_query("cccccccccccccccccccc", "started", 100));
        let body = tracker.handle_announce(LOCALHOST, query_map(&without_ids)).unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("7:peer id"));
    }

    #[test]
    fn test_compact_peer_list_is_six_bytes_per_peer() {
        let peers = vec![
            peer(1, IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 6666, 0),
            peer(2, IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2)), 6666, 100),
            peer(3, IpAddr::V4(Ipv4Addr::new(127, 0, 0, 3)), 6666, 100),
        ];

        let response = AnnounceResponse::from_peers(1800, &peers, true, false).unwrap();

        let AnnouncePeerList::Compact(bytes) = &response.peers else {
            panic!("expected a compact peer list");
        };
        assert_eq!(bytes.len(), 18);

        let mut reader = Cursor::new(bytes.clone());
        for index in 1..=3u8 {
            let ip = Ipv4Addr::from(reader.read_u32::<BigEndian>().unwrap());
            let port = reader.read_u16::<BigEndian>().unwrap();
            assert_eq!(ip, Ipv4Addr::new(127, 0, 0, index));
            assert_eq!(port, 6666);
        }

        assert_eq!(response.complete, 1);
        assert_eq!(response.incomplete, 2);
    }

    #[test]
    fn test_compact_peer_list_rejects_ipv6_peers() {
        let peers = vec![peer(1, IpAddr::V6(Ipv6Addr::LOCALHOST), 6881, 0)];

        let result = AnnounceResponse::from_peers(1800, &peers, true, false);

        assert!(matches!(result, Err(TrackerError::Encoding(_))));
    }

    #[test]
    fn test_full_peer_list_preserves_input_order() {
        let peers = vec![
            peer(9, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9)), 6009, 100),
            peer(1, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 6001, 0),
        ];

        let response = AnnounceResponse::from_peers(60, &peers, false, false).unwrap();

        let AnnouncePeerList::Full(entries) = &response.peers else {
            panic!("expected a full peer list");
        };
        assert_eq!(entries[0].ip, "10.0.0.9");
        assert_eq!(entries[1].ip, "10.0.0.1");
    }

    #[test]
    fn test_scrape_reports_seeders_leechers_and_downloads() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        tracker.store.register_peer(&torrent(), &peer(1, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 6001, 0));
        tracker.store.register_peer(&torrent(), &peer(2, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 6002, 500));

        let body = tracker.handle_scrape(LOCALHOST, query_map("info_hash=aaaaaaaaaaaaaaaaaaaa")).unwrap();

        let expected = b"d5:filesd20:aaaaaaaaaaaaaaaaaaaad8:completei1e10:downloadedi0e10:incompletei1eeee".to_vec();
        assert_eq!(body, expected);
    }

    #[test]
    fn test_scrape_skips_unknown_hashes_silently() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());

        let body = tracker.handle_scrape(
            LOCALHOST,
            query_map("info_hash=aaaaaaaaaaaaaaaaaaaa&info_hash=zzzzzzzzzzzzzzzzzzzz"),
        ).unwrap();
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("20:aaaaaaaaaaaaaaaaaaaa"));
        assert!(!text.contains("zzzzzzzzzzzzzzzzzzzz"));
    }

    #[test]
    fn test_scrape_rejects_malformed_hashes() {
        let tracker = tracker(true);

        let result = tracker.handle_scrape(LOCALHOST, query_map("info_hash=short"));

        assert_eq!(result, Err(TrackerError::Validation("invalid info_hash: expected 20 bytes".to_string())));
    }

    #[test]
    fn test_scrape_without_hashes_lists_every_torrent() {
        let tracker = tracker(true);
        tracker.store.register_torrent(&torrent());
        tracker.store.register_torrent(&InfoHash(*b"cccccccccccccccccccc"));
        tracker.store.register_peer(&torrent(), &peer(1, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 6001, 0));

        let body = tracker.handle_scrape(LOCALHOST, query_map("")).unwrap();
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("20:aaaaaaaaaaaaaaaaaaaa"));
        // a torrent without peers still shows up, with zeroed counters
        assert!(text.contains("20:ccccccccccccccccccccd8:completei0e10:downloadedi0e10:incompletei0ee"));
    }

    #[test]
    fn test_announce_honors_client_ip_override() {
        let tracker = tracker(true);
        let query = format!("{}&ip=10.1.2.3", announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100));

        tracker.handle_announce(LOCALHOST, query_map(&query)).unwrap();

        let peers = tracker.store.list_peers(&torrent(), None, None);
        assert_eq!(peers[0].peer_addr.ip(), IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)));
    }

    #[test]
    fn test_announce_rejects_bad_ip_override() {
        let tracker = tracker(true);
        let query = format!("{}&ip=not-an-ip", announce_query("bbbbbbbbbbbbbbbbbbbb", "started", 100));

        let result = tracker.handle_announce(LOCALHOST, query_map(&query));

        assert_eq!(result, Err(TrackerError::Validation("invalid ip".to_string())));
    }

    #[test]
    fn test_failure_reason_body() {
        assert_eq!(
            TorrentTracker::failure_reason("torrent not found"),
            b"d14:failure reason17:torrent not founde".to_vec()
        );
    }

    #[test]
    fn test_info_hash_display_and_parse_round_trip() {
        let info_hash = InfoHash(*b"aaaaaaaaaaaaaaaaaaaa");
        let hex = info_hash.to_string();

        assert_eq!(hex, "6161616161616161616161616161616161616161");
        assert_eq!(hex.parse::<InfoHash>().unwrap(), info_hash);
        assert!("not-hex".parse::<InfoHash>().is_err());
    }

    #[test]
    fn test_info_hash_serializes_as_hex() {
        let info_hash = InfoHash(*b"aaaaaaaaaaaaaaaaaaaa");

        let serialized = serde_json::to_string(&info_hash).unwrap();
        assert_eq!(serialized, "\"6161616161616161616161616161616161616161\"");

        let parsed: InfoHash = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, info_hash);
    }
}

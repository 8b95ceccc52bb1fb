#![allow(dead_code)]
use rand::RngExt;
use std::collections::HashMap;
use std::sync::Arc;
use swarm_actix::common::common::parse_query;
use swarm_actix::common::structs::number_of_bytes::NumberOfBytes;
use swarm_actix::config::structs::configuration::Configuration;
use swarm_actix::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_actix::tracker::enums::announce_event::AnnounceEvent;
use swarm_actix::tracker::structs::info_hash::InfoHash;
use swarm_actix::tracker::structs::peer_id::PeerId;
use swarm_actix::tracker::structs::torrent_peer::TorrentPeer;
use swarm_actix::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.auto_register = true;
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 4,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

pub fn create_test_peer(
    peer_id: PeerId,
    ip: std::net::IpAddr,
    port: u16,
    left: i64
) -> TorrentPeer {
    TorrentPeer {
        peer_id,
        peer_addr: std::net::SocketAddr::new(ip, port),
        updated: std::time::Instant::now(),
        uploaded: NumberOfBytes(0),
        downloaded: NumberOfBytes(0),
        left: NumberOfBytes(left),
        event: AnnounceEvent::Started,
    }
}

pub fn query_map(query: &str) -> HashMap<String, Vec<Vec<u8>>> {
    parse_query(Some(query.to_string())).expect("query parsing never fails")
}

/// A complete announce query string for an ASCII info hash.
pub fn announce_query(info_hash: &str, peer_id: &str, event: &str, left: u64) -> String {
    let mut query = format!(
        "info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left={}",
        info_hash, peer_id, left
    );
    if !event.is_empty() {
        query.push_str(&format!("&event={}", event));
    }
    query
}

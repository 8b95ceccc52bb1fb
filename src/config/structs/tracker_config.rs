use serde::{Deserialize, Serialize};

/// Core tracker behavior knobs.
///
/// `request_interval` is the announce interval handed to clients,
/// `auto_register` decides whether an announce for an unknown torrent
/// registers it on the fly, and `peers_returned` caps the peer list in
/// announce responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub request_interval: u64,
    pub auto_register: bool,
    pub peers_returned: u64,
}

use std::net::SocketAddr;
use crate::common::structs::number_of_bytes::NumberOfBytes;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl AnnounceQueryRequest {
    /// Builds the peer record this request describes, stamped with the
    /// lifecycle event the registry is about to apply.
    pub fn to_peer(&self, event: AnnounceEvent) -> TorrentPeer {
        TorrentPeer {
            peer_id: self.peer_id,
            peer_addr: SocketAddr::new(self.peer_addr, self.port),
            updated: std::time::Instant::now(),
            uploaded: NumberOfBytes(self.uploaded as i64),
            downloaded: NumberOfBytes(self.downloaded as i64),
            left: NumberOfBytes(self.left as i64),
            event,
        }
    }
}

use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A validated announce request.
///
/// Produced by the validation stage from the raw query map; `peer_addr`
/// is already resolved to the client-supplied `ip` override when one was
/// given, the connection address otherwise.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub compact: bool,
    pub no_peer_id: bool,
    pub event: AnnounceEvent,
    pub peer_addr: IpAddr,
}

use crate::tracker::structs::peer_id::PeerId;

/// One peer entry of a non-compact announce response.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnouncePeerEntry {
    pub peer_id: Option<PeerId>,
    pub ip: String,
    pub port: u16,
}

/// The peer list of an announce response, in the form the client asked
/// for: either the packed 6-bytes-per-peer string or the verbose
/// dictionary list.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum AnnouncePeerList {
    Compact(Vec<u8>),
    Full(Vec<AnnouncePeerEntry>),
}

/// An announce response body before bencoding.
///
/// `complete`/`incomplete` are classified from the same peer list that
/// is emitted, so the counters and the list can never disagree.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub interval: u64,
    pub complete: u64,
    pub incomplete: u64,
    pub peers: AnnouncePeerList,
}

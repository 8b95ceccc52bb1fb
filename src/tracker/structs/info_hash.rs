//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 digest of the "info" dictionary in a torrent file, treated
/// here as an opaque byte string: it identifies a swarm and is never
/// interpreted numerically. Rendered as 40 hex characters for display
/// and serialization.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);

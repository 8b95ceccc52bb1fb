/// A 20-byte peer identifier, supplied by the client on every announce.
///
/// Opaque to the tracker; together with the info hash it uniquely keys a
/// peer record.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);

use thiserror::Error;

/// Why a request could not be answered normally.
///
/// Every variant renders as the plain message a BitTorrent client receives
/// in the bencoded `failure reason` dictionary. Validation failures name the
/// offending query field; protocol-state failures describe a request that is
/// inconsistent with what the tracker knows about the swarm; encoding
/// failures mark a response the tracker refuses to build (an IPv6 peer in a
/// compact peer list).
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    ProtocolState(&'static str),
    #[error("{0}")]
    Encoding(String),
}
